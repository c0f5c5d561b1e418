//! Stdhl Value - tagged scalar/heap values.
//!
//! A [`Value`] is either *trivial*, holding a `u64` magnitude inline, or
//! *non-trivial*, exclusively owning a heap [`Layout`] payload (possibly
//! none, in which case it is *undefined*). Both kinds carry a sign flag.
//!
//! Typed wrappers sit on top:
//! - [`IntegerValue`]: a single-word signed integer on a trivial value
//! - [`StringValue`]: text in a [`StringLayout`] payload
//!
//! Numeral rendering comes from `stdhl_numeral`, whose main types are
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use stdhl_value::{IntegerValue, Literal, NumeralFormat, Radix, StringValue, Value};
//!
//! let v = Value::scalar(255, false);
//! assert_eq!(v.to_string_radix(Radix::Hexadecimal, Literal::Stdhl).unwrap(), "0xff");
//!
//! let n: IntegerValue = "-12".parse().unwrap();
//! assert_eq!(n.to_i64(), Some(-12));
//! assert_eq!(n.encode(NumeralFormat::new(Radix::Binary, Literal::Cpp14)).unwrap(), "0b1100");
//!
//! let mut s = StringValue::new("ab");
//! s += &StringValue::new("cd");
//! assert_eq!(s.as_str(), Some("abcd"));
//! ```

mod error;
pub mod hash;
mod integer;
mod layout;
mod string;
mod value;

pub use error::ValueError;
pub use integer::IntegerValue;
pub use layout::Layout;
pub use string::{StringLayout, StringValue};
pub use value::Value;

pub use stdhl_numeral::{Literal, NumeralError, NumeralFormat, Radix};
