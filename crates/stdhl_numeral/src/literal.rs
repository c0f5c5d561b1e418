//! Literal dialects: the prefix conventions and alphabets a numeral may use.

use std::fmt;
use std::str::FromStr;

use crate::table::DigitTable;

/// A literal dialect.
///
/// Discriminants are the stable dialect codes. Dialects are grouped by
/// decade: codes `0..10` share the general alphabet, `10..20` the base64
/// alphabet and `20..30` the unix radix-64 alphabet. [`Literal::digit_table`]
/// spells that grouping out as an exhaustive match.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Literal {
    /// Bare digits: no prefix and no sign for any radix.
    #[default]
    None = 0,
    /// The library-native dialect (`0b`, `0c`, `0x`).
    Stdhl = 1,
    /// C integer literals (`0` for octal, `0x`; no binary).
    C = 2,
    /// C++14 integer literals (adds `0b`).
    Cpp14 = 3,
    /// RFC 4648 base64 alphabet, radix 64 only.
    Base64 = 10,
    /// The `crypt(3)` radix-64 alphabet, radix 64 only.
    Unix = 20,
}

impl Literal {
    /// Every dialect, in code order.
    pub const ALL: [Literal; 6] = [
        Literal::None,
        Literal::Stdhl,
        Literal::C,
        Literal::Cpp14,
        Literal::Base64,
        Literal::Unix,
    ];

    /// The stable numeric dialect code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The alphabet this dialect draws its digits from.
    pub const fn digit_table(self) -> DigitTable {
        match self {
            Literal::None | Literal::Stdhl | Literal::C | Literal::Cpp14 => DigitTable::General,
            Literal::Base64 => DigitTable::Base64,
            Literal::Unix => DigitTable::Unix,
        }
    }

    /// Whether decimal literals in this dialect carry a leading `-`.
    pub const fn emits_sign(self) -> bool {
        matches!(self, Literal::Stdhl | Literal::C | Literal::Cpp14)
    }

    /// Name accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Literal::None => "none",
            Literal::Stdhl => "stdhl",
            Literal::C => "c",
            Literal::Cpp14 => "cpp14",
            Literal::Base64 => "base64",
            Literal::Unix => "unix",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown literal dialect `{0}` (expected none, stdhl, c, cpp14, base64 or unix)")]
pub struct ParseLiteralError(pub String);

impl FromStr for Literal {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Literal::None),
            "stdhl" | "native" => Ok(Literal::Stdhl),
            "c" => Ok(Literal::C),
            "cpp14" | "c++14" => Ok(Literal::Cpp14),
            "base64" => Ok(Literal::Base64),
            "unix" => Ok(Literal::Unix),
            _ => Err(ParseLiteralError(s.to_string())),
        }
    }
}
