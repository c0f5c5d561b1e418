//! Codec errors.
//!
//! Everything here describes malformed input and is returned to the caller.
//! Contract violations elsewhere in the workspace panic instead.

use crate::{Literal, Radix};

/// Result type for codec operations.
pub type NumeralResult<T> = Result<T, NumeralError>;

/// A recoverable codec error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NumeralError {
    /// The dialect defines no literal format for this radix.
    #[error("{literal} literal format not specified for radix '{radix}'")]
    UnsupportedFormat { radix: Radix, literal: Literal },

    /// The character is not part of the dialect's alphabet.
    #[error("invalid character '{character}' to convert to a digit")]
    InvalidCharacter { character: char, literal: Literal },

    /// The character is a digit, but too large for the radix.
    #[error("digit '{digit}' must be smaller than radix '{radix}'")]
    DigitTooLarge { digit: u8, radix: Radix },

    /// The text does not start with the prefix the format requires.
    #[error("expected literal prefix `{prefix}`")]
    MissingPrefix { prefix: &'static str },

    /// Nothing left to decode after the prefix.
    #[error("literal has no digits")]
    MissingDigits,

    /// The literal does not fit in a single 64-bit word.
    #[error("radix '{radix}' literal does not fit in 64 bits")]
    Overflow { radix: Radix },
}
