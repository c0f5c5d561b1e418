//! Stdhl Numeral - multi-radix text codec for single-word scalars.
//!
//! This crate provides:
//! - Numeral bases (`Radix`) and literal dialects (`Literal`)
//! - The three fixed digit alphabets (`DigitTable`)
//! - Scalar encoding with dialect prefixes (`encode`)
//! - Digit and literal decoding (`decode_digit`, `decode`)
//! - A validated radix/dialect pair for callers that carry settings (`NumeralFormat`)
//!
//! # Literal Dialects
//!
//! | Dialect  | Binary | Octal | Decimal | Hex  | Sexagesimal | Radix 64 |
//! |----------|--------|-------|---------|------|-------------|----------|
//! | `None`   | -      | -     | -       | -    | -           | -        |
//! | `Stdhl`  | `0b`   | `0c`  | `-`     | `0x` | error       | -        |
//! | `C`      | error  | `0`   | `-`     | `0x` | `0s`        | error    |
//! | `Cpp14`  | `0b`   | `0`   | `-`     | `0x` | `0s`        | error    |
//! | `Base64` | error  | error | error   | error| error       | -        |
//! | `Unix`   | error  | error | error   | error| error       | -        |
//!
//! `-` in the table means "no prefix"; decimal emits a leading minus only
//! for signed values.
//!
//! # Example
//!
//! ```
//! use stdhl_numeral::{decode_digit, encode, Literal, Radix};
//!
//! assert_eq!(encode(10, false, Radix::Binary, Literal::Stdhl).unwrap(), "0b1010");
//! assert_eq!(encode(8, false, Radix::Octal, Literal::C).unwrap(), "010");
//! assert!(decode_digit('g', Radix::Hexadecimal, Literal::None).is_err());
//! ```

mod decode;
mod encode;
mod error;
mod format;
mod literal;
mod radix;
mod table;

pub use decode::{decode, decode_digit};
pub use encode::{encode, prefix};
pub use error::{NumeralError, NumeralResult};
pub use format::NumeralFormat;
pub use literal::{Literal, ParseLiteralError};
pub use radix::{ParseRadixError, Radix};
pub use table::DigitTable;
