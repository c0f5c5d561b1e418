//! Single-word signed integers on a trivial `Value`.
//!
//! The magnitude is stored unsigned with a separate sign, so the full
//! `u64` range and `i64::MIN` are both representable. Zero is never signed.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use stdhl_numeral::{NumeralError, NumeralFormat, NumeralResult};

use crate::Value;

/// A signed integer of one machine word.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntegerValue(Value);

impl IntegerValue {
    /// Build from a magnitude and sign. A signed zero is stored unsigned.
    #[inline]
    pub const fn new(magnitude: u64, sign: bool) -> Self {
        IntegerValue(Value::scalar(magnitude, sign && magnitude != 0))
    }

    #[inline]
    pub fn sign(&self) -> bool {
        self.0.sign()
    }

    #[inline]
    pub fn magnitude(&self) -> u64 {
        self.0.value()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude() == 0
    }

    /// The magnitude words, least significant first. At scalar precision
    /// there is exactly one.
    pub fn words(&self) -> [u64; 1] {
        [self.magnitude()]
    }

    /// A single magnitude word.
    ///
    /// # Panics
    ///
    /// If `index` is past the last word.
    #[track_caller]
    pub fn word(&self, index: usize) -> u64 {
        assert!(index == 0, "word index {index} out of range for a single-word integer");
        self.magnitude()
    }

    /// The value as `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.sign() {
            0i64.checked_sub_unsigned(self.magnitude())
        } else {
            i64::try_from(self.magnitude()).ok()
        }
    }

    /// The value as `u64`, if it is not negative.
    pub fn to_u64(&self) -> Option<u64> {
        if self.sign() {
            None
        } else {
            Some(self.magnitude())
        }
    }

    /// Render as a literal in `format`.
    pub fn encode(&self, format: NumeralFormat) -> NumeralResult<String> {
        format.encode(self.magnitude(), self.sign())
    }

    /// Parse a literal in `format`.
    pub fn parse(text: &str, format: NumeralFormat) -> NumeralResult<Self> {
        let (magnitude, sign) = format.decode(text)?;
        Ok(IntegerValue::new(magnitude, sign))
    }

    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for IntegerValue {
    fn default() -> Self {
        IntegerValue::new(0, false)
    }
}

impl From<u64> for IntegerValue {
    fn from(value: u64) -> Self {
        IntegerValue::new(value, false)
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue::new(value.unsigned_abs(), value < 0)
    }
}

impl From<u32> for IntegerValue {
    fn from(value: u32) -> Self {
        IntegerValue::from(u64::from(value))
    }
}

impl From<i32> for IntegerValue {
    fn from(value: i32) -> Self {
        IntegerValue::from(i64::from(value))
    }
}

impl TryFrom<Value> for IntegerValue {
    type Error = Value;

    /// Accepts trivial values; a signed zero is normalized.
    fn try_from(value: Value) -> Result<Self, Value> {
        if value.trivial() {
            Ok(IntegerValue::new(value.value(), value.sign()))
        } else {
            Err(value)
        }
    }
}

impl Neg for IntegerValue {
    type Output = IntegerValue;

    fn neg(self) -> IntegerValue {
        if self.is_zero() {
            return self;
        }
        IntegerValue(-self.0)
    }
}

impl Neg for &IntegerValue {
    type Output = IntegerValue;

    fn neg(self) -> IntegerValue {
        -self.clone()
    }
}

impl FromStr for IntegerValue {
    type Err = NumeralError;

    /// Parses native decimal, e.g. `"-42"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntegerValue::parse(s, NumeralFormat::NATIVE_DECIMAL)
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .encode(NumeralFormat::NATIVE_DECIMAL)
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
