//! The tagged value: an inline scalar or an exclusively owned heap payload.
//!
//! # Representation
//!
//! ```text
//! Value { sign, repr }
//!              │
//!              ├── Scalar(u64)                    trivial
//!              └── Heap(Option<Box<dyn Layout>>)  non-trivial; None = undefined
//! ```
//!
//! # Ownership
//!
//! - `Clone` deep-copies the payload through `Layout::clone_layout`; two
//!   values never share a payload.
//! - A Rust move transfers the value. [`Value::move_from`] additionally
//!   offers the swap contract: the source is left holding whatever the
//!   destination held, not an empty value.
//! - Dropping a value releases its payload exactly once.
//!
//! # Equality
//!
//! Scalars compare by magnitude and sign. Heap values compare by payload
//! identity: two values holding equal but distinct payloads are unequal.
//! Content equality lives on the typed wrappers (`StringValue`, `IntegerValue`).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use stdhl_numeral::{Literal, NumeralFormat, NumeralResult, Radix};
use tracing::trace;

use crate::{Layout, ValueError};

/// Scalar-or-payload storage.
enum Repr {
    Scalar(u64),
    Heap(Option<Box<dyn Layout>>),
}

/// A tagged value.
pub struct Value {
    sign: bool,
    repr: Repr,
}

impl Value {
    /// A trivial value holding `value` inline.
    #[inline]
    pub const fn scalar(value: u64, sign: bool) -> Self {
        Value {
            sign,
            repr: Repr::Scalar(value),
        }
    }

    /// A non-trivial value taking ownership of `payload`.
    ///
    /// # Panics
    ///
    /// If the payload type is zero-sized.
    #[inline]
    #[track_caller]
    pub fn from_layout(payload: Box<dyn Layout>) -> Self {
        Value {
            sign: false,
            repr: Repr::Heap(Some(sized(payload))),
        }
    }

    /// A non-trivial value owning a freshly boxed `payload`.
    ///
    /// # Panics
    ///
    /// If the payload type is zero-sized.
    #[inline]
    #[track_caller]
    pub fn with_layout(payload: impl Layout) -> Self {
        Self::from_layout(Box::new(payload))
    }

    /// A non-trivial value without a payload.
    #[inline]
    pub const fn undefined() -> Self {
        Value {
            sign: false,
            repr: Repr::Heap(None),
        }
    }

    #[inline]
    pub const fn sign(&self) -> bool {
        self.sign
    }

    /// Whether the value is stored inline.
    #[inline]
    pub const fn trivial(&self) -> bool {
        matches!(self.repr, Repr::Scalar(_))
    }

    /// Trivial, or non-trivial with a payload.
    #[inline]
    pub const fn defined(&self) -> bool {
        !matches!(self.repr, Repr::Heap(None))
    }

    /// The inline scalar.
    ///
    /// # Panics
    ///
    /// If the value is not trivial.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> u64 {
        match self.repr {
            Repr::Scalar(value) => value,
            Repr::Heap(_) => panic!("scalar accessor used on a heap-backed value"),
        }
    }

    /// Replace the inline scalar, keeping the sign.
    ///
    /// # Panics
    ///
    /// If the value is not trivial.
    #[track_caller]
    pub fn set_value(&mut self, value: u64) {
        match &mut self.repr {
            Repr::Scalar(slot) => *slot = value,
            Repr::Heap(_) => panic!("scalar accessor used on a heap-backed value"),
        }
    }

    /// The owned payload, `None` when undefined.
    ///
    /// # Panics
    ///
    /// If the value is trivial.
    #[inline]
    #[track_caller]
    pub fn ptr(&self) -> Option<&(dyn Layout + 'static)> {
        match &self.repr {
            Repr::Heap(payload) => payload.as_deref(),
            Repr::Scalar(_) => panic!("payload accessor used on a trivial value"),
        }
    }

    /// Mutable access to the owned payload.
    ///
    /// # Panics
    ///
    /// If the value is trivial.
    #[track_caller]
    pub fn ptr_mut(&mut self) -> Option<&mut (dyn Layout + 'static)> {
        match &mut self.repr {
            Repr::Heap(payload) => payload.as_deref_mut(),
            Repr::Scalar(_) => panic!("payload accessor used on a trivial value"),
        }
    }

    /// Replace the payload. The previous payload, if any, is released.
    ///
    /// # Panics
    ///
    /// If the value is trivial, or the new payload type is zero-sized.
    #[track_caller]
    pub fn set_ptr(&mut self, payload: Option<Box<dyn Layout>>) {
        let payload = payload.map(sized);
        match &mut self.repr {
            Repr::Heap(slot) => {
                if let Some(old) = slot.as_deref() {
                    trace!(kind = old.kind(), "releasing replaced payload");
                }
                *slot = payload;
            }
            Repr::Scalar(_) => panic!("payload accessor used on a trivial value"),
        }
    }

    /// Move the payload out, leaving the value undefined.
    ///
    /// # Panics
    ///
    /// If the value is trivial.
    #[track_caller]
    pub fn take_layout(&mut self) -> Option<Box<dyn Layout>> {
        match &mut self.repr {
            Repr::Heap(slot) => slot.take(),
            Repr::Scalar(_) => panic!("payload accessor used on a trivial value"),
        }
    }

    /// The payload as a concrete type. `None` for trivial or undefined
    /// values and for payloads of another type.
    pub fn downcast_ref<T: Layout>(&self) -> Option<&T> {
        match &self.repr {
            Repr::Heap(Some(payload)) => payload.downcast_ref(),
            _ => None,
        }
    }

    pub fn downcast_mut<T: Layout>(&mut self) -> Option<&mut T> {
        match &mut self.repr {
            Repr::Heap(Some(payload)) => payload.downcast_mut(),
            _ => None,
        }
    }

    /// Payload name for diagnostics: `"scalar"`, `"undefined"`, or the
    /// payload's own kind.
    pub fn kind(&self) -> &'static str {
        match &self.repr {
            Repr::Scalar(_) => "scalar",
            Repr::Heap(None) => "undefined",
            Repr::Heap(Some(payload)) => payload.kind(),
        }
    }

    /// Swap-based move: `self` takes the state of `source`, and `source`
    /// is left holding what `self` held before.
    ///
    /// Callers must not assume `source` is empty afterwards.
    pub fn move_from(&mut self, source: &mut Value) {
        trace!(from = source.kind(), to = self.kind(), "swapping values");
        std::mem::swap(self, source);
    }

    /// Render the inline scalar as a literal.
    ///
    /// Heap-backed values have no numeral form; they fail with
    /// [`ValueError::NotScalar`].
    pub fn encode(&self, format: NumeralFormat) -> Result<String, ValueError> {
        match self.repr {
            Repr::Scalar(value) => Ok(format.encode(value, self.sign)?),
            Repr::Heap(_) => Err(ValueError::NotScalar { kind: self.kind() }),
        }
    }

    /// [`encode`](Self::encode) with the radix and dialect given separately.
    pub fn to_string_radix(&self, radix: Radix, literal: Literal) -> Result<String, ValueError> {
        self.encode(NumeralFormat::new(radix, literal))
    }

    /// The digit value of `character`; see [`stdhl_numeral::decode_digit`].
    #[inline]
    pub fn to_digit(character: char, radix: Radix, literal: Literal) -> NumeralResult<u8> {
        stdhl_numeral::decode_digit(character, radix, literal)
    }
}

/// Payload identity is its address, and every zero-sized box shares one.
#[track_caller]
fn sized(payload: Box<dyn Layout>) -> Box<dyn Layout> {
    assert!(
        std::mem::size_of_val(&*payload) != 0,
        "zero-sized `{}` payload has no identity of its own",
        payload.kind()
    );
    payload
}

impl Default for Value {
    /// An undefined value.
    fn default() -> Self {
        Value::undefined()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Scalar(value) => Repr::Scalar(*value),
            Repr::Heap(None) => Repr::Heap(None),
            Repr::Heap(Some(payload)) => {
                trace!(kind = payload.kind(), "cloning payload");
                Repr::Heap(Some(sized(payload.clone_layout())))
            }
        };
        Value {
            sign: self.sign,
            repr,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Scalar(lhs), Repr::Scalar(rhs)) => lhs == rhs && self.sign == other.sign,
            (Repr::Heap(Some(lhs)), Repr::Heap(Some(rhs))) => {
                let lhs: *const dyn Layout = &**lhs;
                let rhs: *const dyn Layout = &**rhs;
                std::ptr::addr_eq(lhs, rhs)
            }
            (Repr::Heap(None), Repr::Heap(None)) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// # Panics
    ///
    /// If the value is not trivial.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(crate::hash::value(self));
    }
}

impl Neg for Value {
    type Output = Value;

    /// The same value with the sign flipped.
    fn neg(mut self) -> Value {
        self.sign = !self.sign;
        self
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        -self.clone()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Scalar(value) => f
                .debug_struct("Scalar")
                .field("value", value)
                .field("sign", &self.sign)
                .finish(),
            Repr::Heap(Some(payload)) => f
                .debug_struct("Heap")
                .field("payload", payload)
                .field("sign", &self.sign)
                .finish(),
            Repr::Heap(None) => f.write_str("Undefined"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Scalar(value) => {
                let text = NumeralFormat::NATIVE_DECIMAL
                    .encode(*value, self.sign)
                    .map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
            Repr::Heap(Some(payload)) => write!(f, "<{}>", payload.kind()),
            Repr::Heap(None) => f.write_str("<undefined>"),
        }
    }
}

#[cfg(test)]
mod tests;
