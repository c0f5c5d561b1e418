//! A radix and dialect carried together.

use std::fmt;

use tracing::debug;

use crate::{decode, decode_digit, encode, prefix, Literal, NumeralResult, Radix};

/// Codec settings: which base to write in and which dialect to follow.
///
/// The default is bare decimal (`Radix::Decimal`, `Literal::None`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumeralFormat {
    pub radix: Radix,
    pub literal: Literal,
}

impl NumeralFormat {
    /// Library-native decimal, which renders signs.
    pub const NATIVE_DECIMAL: Self = Self::new(Radix::Decimal, Literal::Stdhl);

    #[inline]
    pub const fn new(radix: Radix, literal: Literal) -> Self {
        Self { radix, literal }
    }

    /// Fail unless the dialect defines literals for the radix.
    pub fn check(self) -> NumeralResult<Self> {
        prefix(self.radix, self.literal, false)?;
        debug!(radix = %self.radix, literal = %self.literal, "numeral format accepted");
        Ok(self)
    }

    /// Whether [`check`](Self::check) would succeed.
    pub fn is_supported(self) -> bool {
        prefix(self.radix, self.literal, false).is_ok()
    }

    /// The prefix for a value with the given sign.
    pub fn prefix(self, sign: bool) -> NumeralResult<&'static str> {
        prefix(self.radix, self.literal, sign)
    }

    pub fn encode(self, value: u64, sign: bool) -> NumeralResult<String> {
        encode(value, sign, self.radix, self.literal)
    }

    pub fn decode(self, text: &str) -> NumeralResult<(u64, bool)> {
        decode(text, self.radix, self.literal)
    }

    pub fn decode_digit(self, character: char) -> NumeralResult<u8> {
        decode_digit(character, self.radix, self.literal)
    }

    /// Every supported format, by dialect then radix.
    pub fn supported() -> impl Iterator<Item = NumeralFormat> {
        Literal::ALL.into_iter().flat_map(|literal| {
            Radix::ALL
                .into_iter()
                .map(move |radix| NumeralFormat::new(radix, literal))
                .filter(|format| format.is_supported())
        })
    }
}

impl From<(Radix, Literal)> for NumeralFormat {
    fn from((radix, literal): (Radix, Literal)) -> Self {
        Self::new(radix, literal)
    }
}

impl fmt::Display for NumeralFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radix {} ({} literal)", self.radix, self.literal)
    }
}
