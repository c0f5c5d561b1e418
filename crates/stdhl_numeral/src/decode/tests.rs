use super::*;
use pretty_assertions::assert_eq;

#[test]
fn digit_values_follow_general_table() {
    assert_eq!(decode_digit('0', Radix::Binary, Literal::None), Ok(0));
    assert_eq!(decode_digit('7', Radix::Octal, Literal::C), Ok(7));
    assert_eq!(decode_digit('f', Radix::Hexadecimal, Literal::Stdhl), Ok(15));
    assert_eq!(decode_digit('X', Radix::Sexagesimal, Literal::Cpp14), Ok(59));
    assert_eq!(decode_digit('$', Radix::Radix64, Literal::Stdhl), Ok(63));
}

#[test]
fn g_is_too_large_for_hex() {
    assert_eq!(
        decode_digit('g', Radix::Hexadecimal, Literal::None),
        Err(NumeralError::DigitTooLarge {
            digit: 16,
            radix: Radix::Hexadecimal,
        })
    );
}

#[test]
fn uppercase_hex_is_not_a_hex_digit() {
    // 'F' sits at index 41 of the general table.
    assert_eq!(
        decode_digit('F', Radix::Hexadecimal, Literal::C),
        Err(NumeralError::DigitTooLarge {
            digit: 41,
            radix: Radix::Hexadecimal,
        })
    );
}

#[test]
fn characters_outside_the_alphabet() {
    assert_eq!(
        decode_digit('+', Radix::Radix64, Literal::Stdhl),
        Err(NumeralError::InvalidCharacter {
            character: '+',
            literal: Literal::Stdhl,
        })
    );
    assert_eq!(
        decode_digit('@', Radix::Radix64, Literal::Base64),
        Err(NumeralError::InvalidCharacter {
            character: '@',
            literal: Literal::Base64,
        })
    );
    assert_eq!(
        decode_digit('_', Radix::Decimal, Literal::None),
        Err(NumeralError::InvalidCharacter {
            character: '_',
            literal: Literal::None,
        })
    );
}

#[test]
fn radix64_alphabets_differ() {
    assert_eq!(decode_digit('A', Radix::Radix64, Literal::Base64), Ok(0));
    assert_eq!(decode_digit('+', Radix::Radix64, Literal::Base64), Ok(62));
    assert_eq!(decode_digit('.', Radix::Radix64, Literal::Unix), Ok(0));
    assert_eq!(decode_digit('z', Radix::Radix64, Literal::Unix), Ok(63));
}

#[test]
fn decode_prefixed_literals() {
    assert_eq!(decode("0b1010", Radix::Binary, Literal::Stdhl), Ok((10, false)));
    assert_eq!(decode("0c10", Radix::Octal, Literal::Stdhl), Ok((8, false)));
    assert_eq!(decode("010", Radix::Octal, Literal::C), Ok((8, false)));
    assert_eq!(decode("0xff", Radix::Hexadecimal, Literal::Cpp14), Ok((255, false)));
    assert_eq!(decode("0s100", Radix::Sexagesimal, Literal::C), Ok((3600, false)));
    assert_eq!(decode("BA", Radix::Radix64, Literal::Base64), Ok((64, false)));
}

#[test]
fn decode_signed_decimal() {
    assert_eq!(decode("-42", Radix::Decimal, Literal::Stdhl), Ok((42, true)));
    assert_eq!(decode("42", Radix::Decimal, Literal::C), Ok((42, false)));
    assert_eq!(decode("-0", Radix::Decimal, Literal::Stdhl), Ok((0, false)));
}

#[test]
fn minus_is_not_a_digit_without_sign_support() {
    assert_eq!(
        decode("-42", Radix::Decimal, Literal::None),
        Err(NumeralError::InvalidCharacter {
            character: '-',
            literal: Literal::None,
        })
    );
    assert_eq!(
        decode("-0x1", Radix::Hexadecimal, Literal::Stdhl),
        Err(NumeralError::MissingPrefix { prefix: "0x" })
    );
}

#[test]
fn decode_requires_prefix_and_digits() {
    assert_eq!(
        decode("1010", Radix::Binary, Literal::Stdhl),
        Err(NumeralError::MissingPrefix { prefix: "0b" })
    );
    assert_eq!(
        decode("0x", Radix::Hexadecimal, Literal::Stdhl),
        Err(NumeralError::MissingDigits)
    );
    assert_eq!(decode("", Radix::Decimal, Literal::None), Err(NumeralError::MissingDigits));
    assert_eq!(
        decode("0b1", Radix::Binary, Literal::C),
        Err(NumeralError::UnsupportedFormat {
            radix: Radix::Binary,
            literal: Literal::C,
        })
    );
}

#[test]
fn lone_zero_is_a_c_octal_literal() {
    assert_eq!(decode("0", Radix::Octal, Literal::C), Ok((0, false)));
    assert_eq!(decode("0", Radix::Octal, Literal::Cpp14), Ok((0, false)));
    assert_eq!(decode("00", Radix::Octal, Literal::C), Ok((0, false)));
    assert_eq!(decode("", Radix::Octal, Literal::C), Err(NumeralError::MissingPrefix { prefix: "0" }));
    assert_eq!(decode("0c", Radix::Octal, Literal::Stdhl), Err(NumeralError::MissingDigits));
}

#[test]
fn decode_overflow() {
    assert_eq!(
        decode("18446744073709551615", Radix::Decimal, Literal::None),
        Ok((u64::MAX, false))
    );
    assert_eq!(
        decode("18446744073709551616", Radix::Decimal, Literal::None),
        Err(NumeralError::Overflow {
            radix: Radix::Decimal,
        })
    );
    assert_eq!(
        decode("0x10000000000000000", Radix::Hexadecimal, Literal::Stdhl),
        Err(NumeralError::Overflow {
            radix: Radix::Hexadecimal,
        })
    );
}
