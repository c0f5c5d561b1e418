//! Text to scalar.

use tracing::trace;

use crate::encode::prefix;
use crate::{Literal, NumeralError, NumeralResult, Radix};

/// The digit value of `character` under `radix` and `literal`.
///
/// Fails with [`NumeralError::InvalidCharacter`] when the character is not in
/// the dialect's alphabet, and with [`NumeralError::DigitTooLarge`] when it
/// is, but its value is not below the radix.
pub fn decode_digit(character: char, radix: Radix, literal: Literal) -> NumeralResult<u8> {
    let table = literal.digit_table();
    let digit = table
        .index_of(character)
        .ok_or(NumeralError::InvalidCharacter { character, literal })?;

    if digit >= radix.value() {
        return Err(NumeralError::DigitTooLarge { digit, radix });
    }
    Ok(digit)
}

/// Decode a literal produced by [`encode`](crate::encode) back into a
/// magnitude and sign.
///
/// The text must carry exactly the prefix `encode` emits for the format. A
/// leading `-` is accepted for decimal in dialects that render signs. A
/// negative zero decodes as unsigned zero, and a bare `"0"` is zero under
/// the C-family octal prefix.
#[tracing::instrument(level = "trace", ret)]
pub fn decode(text: &str, radix: Radix, literal: Literal) -> NumeralResult<(u64, bool)> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) if radix == Radix::Decimal && literal.emits_sign() => (true, rest),
        _ => (false, text),
    };

    let expected = prefix(radix, literal, false)?;
    let digits = match body.strip_prefix(expected) {
        // The C octal prefix is itself a zero, so a lone "0" is a literal.
        Some("") if expected == "0" => expected,
        Some(digits) => digits,
        None => return Err(NumeralError::MissingPrefix { prefix: expected }),
    };
    if digits.is_empty() {
        return Err(NumeralError::MissingDigits);
    }

    let base = u64::from(radix);
    let mut value: u64 = 0;
    for character in digits.chars() {
        let digit = decode_digit(character, radix, literal)?;
        value = value
            .checked_mul(base)
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or(NumeralError::Overflow { radix })?;
    }
    trace!(digits = digits.len(), "decoded digits");

    Ok((value, sign && value != 0))
}

#[cfg(test)]
mod tests;
