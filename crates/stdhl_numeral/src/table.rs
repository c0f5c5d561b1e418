//! The three fixed digit alphabets.
//!
//! Each alphabet has exactly 64 characters, so the digit value of a
//! character is its index. Reverse lookup goes through a 128-entry table
//! built at compile time; non-ASCII characters are never digits.

const NUMBER: &[u8; 10] = b"0123456789";
const UPPER_CASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_CASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Marks an ASCII byte that is not part of an alphabet.
const NOT_A_DIGIT: u8 = u8::MAX;

/// Alphabet length shared by all tables.
pub(crate) const TABLE_LEN: usize = 64;

const GENERAL: [u8; TABLE_LEN] = concat_alphabet(&[NUMBER, LOWER_CASE, UPPER_CASE, b"@$"]);
const BASE64: [u8; TABLE_LEN] = concat_alphabet(&[UPPER_CASE, LOWER_CASE, NUMBER, b"+/"]);
const UNIX: [u8; TABLE_LEN] = concat_alphabet(&[b"./", NUMBER, UPPER_CASE, LOWER_CASE]);

const GENERAL_INDEX: [u8; 128] = reverse(&GENERAL);
const BASE64_INDEX: [u8; 128] = reverse(&BASE64);
const UNIX_INDEX: [u8; 128] = reverse(&UNIX);

const fn concat_alphabet(parts: &[&[u8]]) -> [u8; TABLE_LEN] {
    let mut out = [0u8; TABLE_LEN];
    let mut len = 0;
    let mut part = 0;
    while part < parts.len() {
        let bytes = parts[part];
        let mut i = 0;
        while i < bytes.len() {
            out[len] = bytes[i];
            len += 1;
            i += 1;
        }
        part += 1;
    }
    assert!(len == TABLE_LEN, "digit alphabets hold exactly 64 characters");
    out
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "indices stay below 64"
)]
const fn reverse(alphabet: &[u8; TABLE_LEN]) -> [u8; 128] {
    let mut index = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < TABLE_LEN {
        index[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    index
}

/// One of the fixed digit alphabets, selected by literal dialect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DigitTable {
    /// `0-9 a-z A-Z @ $`
    General,
    /// `A-Z a-z 0-9 + /`
    Base64,
    /// `. / 0-9 A-Z a-z`
    Unix,
}

impl DigitTable {
    /// All alphabets.
    pub const ALL: [DigitTable; 3] = [DigitTable::General, DigitTable::Base64, DigitTable::Unix];

    /// The alphabet as ASCII bytes, digit value 0 first.
    #[inline]
    pub const fn alphabet(self) -> &'static [u8; TABLE_LEN] {
        match self {
            DigitTable::General => &GENERAL,
            DigitTable::Base64 => &BASE64,
            DigitTable::Unix => &UNIX,
        }
    }

    /// The alphabet as a string slice.
    pub fn as_str(self) -> &'static str {
        // Every alphabet byte is ASCII.
        std::str::from_utf8(self.alphabet()).unwrap_or_default()
    }

    /// The character for a digit value. `digit` must be below 64.
    #[inline]
    pub fn char_for(self, digit: u8) -> char {
        char::from(self.alphabet()[usize::from(digit)])
    }

    /// The digit value of `character`, if it belongs to this alphabet.
    #[inline]
    pub fn index_of(self, character: char) -> Option<u8> {
        let index = match self {
            DigitTable::General => &GENERAL_INDEX,
            DigitTable::Base64 => &BASE64_INDEX,
            DigitTable::Unix => &UNIX_INDEX,
        };
        if !character.is_ascii() {
            return None;
        }
        match index[character as usize] {
            NOT_A_DIGIT => None,
            digit => Some(digit),
        }
    }

    /// Short name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            DigitTable::General => "general",
            DigitTable::Base64 => "base64",
            DigitTable::Unix => "unix",
        }
    }
}
