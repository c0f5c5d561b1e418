//! Numeral bases supported by the codec.

use std::fmt;
use std::str::FromStr;

/// A numeral base.
///
/// The discriminant is the base itself, so `Radix::Hexadecimal as u8 == 16`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    #[default]
    Decimal = 10,
    Hexadecimal = 16,
    Sexagesimal = 60,
    Radix64 = 64,
}

impl Radix {
    /// Every supported base, smallest first.
    pub const ALL: [Radix; 6] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
        Radix::Sexagesimal,
        Radix::Radix64,
    ];

    /// The base as a number.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a base by its numeric value.
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            60 => Some(Radix::Sexagesimal),
            64 => Some(Radix::Radix64),
            _ => None,
        }
    }

    /// Human-readable name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
            Radix::Sexagesimal => "sexagesimal",
            Radix::Radix64 => "radix64",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<Radix> for u64 {
    #[inline]
    fn from(radix: Radix) -> Self {
        u64::from(radix.value())
    }
}

/// Error returned when a radix name or number is not recognized.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown radix `{0}` (expected 2, 8, 10, 16, 60, 64 or a name such as `hexadecimal`)")]
pub struct ParseRadixError(pub String);

impl FromStr for Radix {
    type Err = ParseRadixError;

    /// Accepts either the base (`"16"`) or its name (`"hexadecimal"`, `"hex"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Radix::from_value(value).ok_or_else(|| ParseRadixError(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Radix::Binary),
            "octal" | "oct" => Ok(Radix::Octal),
            "decimal" | "dec" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" => Ok(Radix::Hexadecimal),
            "sexagesimal" | "sex" => Ok(Radix::Sexagesimal),
            "radix64" => Ok(Radix::Radix64),
            _ => Err(ParseRadixError(s.to_string())),
        }
    }
}
