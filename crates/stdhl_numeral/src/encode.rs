//! Scalar to text.

use tracing::trace;

use crate::{Literal, NumeralError, NumeralResult, Radix};

/// The literal prefix for `(radix, literal)`.
///
/// For decimal the prefix is the sign, so it depends on `sign`. Combinations
/// the dialect does not define fail with [`NumeralError::UnsupportedFormat`].
pub fn prefix(radix: Radix, literal: Literal, sign: bool) -> NumeralResult<&'static str> {
    let unsupported = || NumeralError::UnsupportedFormat { radix, literal };

    match literal {
        Literal::None => Ok(""),
        Literal::Stdhl | Literal::C | Literal::Cpp14 => match radix {
            Radix::Binary => match literal {
                Literal::C => Err(unsupported()),
                _ => Ok("0b"),
            },
            Radix::Octal => match literal {
                Literal::Stdhl => Ok("0c"),
                _ => Ok("0"),
            },
            Radix::Decimal => Ok(if sign { "-" } else { "" }),
            Radix::Hexadecimal => Ok("0x"),
            Radix::Sexagesimal => match literal {
                Literal::Stdhl => Err(unsupported()),
                _ => Ok("0s"),
            },
            Radix::Radix64 => match literal {
                Literal::Stdhl => Ok(""),
                _ => Err(unsupported()),
            },
        },
        Literal::Base64 | Literal::Unix => match radix {
            Radix::Radix64 => Ok(""),
            _ => Err(unsupported()),
        },
    }
}

/// Encode a single-word magnitude and sign as a literal.
///
/// Digits come from the dialect's alphabet, most significant first, behind
/// the dialect prefix. A signed zero is rendered as `"0"`.
#[tracing::instrument(level = "trace", ret)]
pub fn encode(value: u64, sign: bool, radix: Radix, literal: Literal) -> NumeralResult<String> {
    let prefix = prefix(radix, literal, sign)?;
    let table = literal.digit_table();
    let base = u64::from(radix);

    // Least significant digit first; reversed below.
    let mut digits = Vec::with_capacity(64);
    let mut rest = value;
    loop {
        digits.push(table.alphabet()[digit_index(rest % base)]);
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    trace!(count = digits.len(), table = table.name(), "encoded digits");

    let mut out = String::with_capacity(prefix.len() + digits.len());
    out.push_str(prefix);
    out.extend(digits.into_iter().map(char::from));

    if out == "-0" {
        return Ok(String::from("0"));
    }
    Ok(out)
}

/// A remainder modulo a radix, as an alphabet index.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "remainders are below the radix, at most 64"
)]
fn digit_index(remainder: u64) -> usize {
    remainder as usize
}
