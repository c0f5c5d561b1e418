//! Hashing for values.
//!
//! Trivial values hash their scalar with FxHash and mix in a seed of
//! `(sign << 1) | defined`. Heap payloads have no hash hook, so hashing a
//! non-trivial value is a contract violation.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::Value;

/// The fractional part of the golden ratio, as used by `hash_combine`.
const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c15;

/// Generic hash of a single machine word.
#[inline]
pub fn integer(value: u64) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(value);
    hasher.finish()
}

/// Mix `hash` into `seed`. Deterministic and order-sensitive.
#[inline]
pub const fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hash of a trivial value.
///
/// # Panics
///
/// If `value` is not trivial.
#[track_caller]
pub fn value(value: &Value) -> u64 {
    assert!(
        value.trivial(),
        "hashing is only defined for trivial values, found `{}`",
        value.kind()
    );
    let seed = (u64::from(value.sign()) << 1) | u64::from(value.defined());
    combine(seed, integer(value.value()))
}
