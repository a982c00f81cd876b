// T9 Search Keypad
// Digit classes of the 12-key telephone pad and the initial-marker alphabet

use crate::types::T9Error;

/// Key characters in lookup-index order: 0-9 → '0'-'9', 10 → '+', 11 → ',', 12 → '*', 13 → '#'
const VALID_T9_KEYS: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', ',', '*', '#',
];

/// Letter → key digit on the standard layout (A-Z)
const LETTER_T9_MAP: &[u8; 26] = b"22233344455566677778889999";

/// Smallest key character; initial markers are offset from it
const KEY_BASE: u8 = b'#';

/// Initial marker of `KEY_BASE`
const INITIAL_BASE: u8 = b'C';

/// Largest initial marker ('9' → 'Y')
const INITIAL_LAST: u8 = b'Y';

/// One of the 14 symbols a telephone key stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitClass(u8);

impl DigitClass {
    /// Every digit class in lookup-index order
    pub const ALL: [DigitClass; 14] = [
        DigitClass(b'0'),
        DigitClass(b'1'),
        DigitClass(b'2'),
        DigitClass(b'3'),
        DigitClass(b'4'),
        DigitClass(b'5'),
        DigitClass(b'6'),
        DigitClass(b'7'),
        DigitClass(b'8'),
        DigitClass(b'9'),
        DigitClass(b'+'),
        DigitClass(b','),
        DigitClass(b'*'),
        DigitClass(b'#'),
    ];

    /// Digit class of a key character, `None` for anything else
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        if is_valid_key_char(c) {
            Some(Self(c as u8))
        } else {
            None
        }
    }

    /// Digit class for a lookup index
    ///
    /// # Errors
    /// `T9Error::InvalidIndex` when `index > 13`
    pub fn from_index(index: usize) -> Result<Self, T9Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(T9Error::InvalidIndex { index })
    }

    /// Lookup index of this class (0-13)
    pub fn index(self) -> usize {
        match self.0 {
            b'0'..=b'9' => (self.0 - b'0') as usize,
            b'+' => 10,
            b',' => 11,
            b'*' => 12,
            _ => 13,
        }
    }

    /// Key character of this class
    #[inline]
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Plain (non-initial) byte written into an encoded key
    #[inline]
    pub fn as_byte(self) -> u8 {
        self.0
    }

    /// Initial-marker form of this class
    #[inline]
    pub fn initial(self) -> char {
        self.initial_byte() as char
    }

    #[inline]
    pub(crate) fn initial_byte(self) -> u8 {
        INITIAL_BASE + (self.0 - KEY_BASE)
    }

    /// Digit class whose initial-marker form is `c`
    pub fn from_initial(c: char) -> Option<Self> {
        if !is_initial_marker(c) {
            return None;
        }
        Self::from_char((c as u8 - INITIAL_BASE + KEY_BASE) as char)
    }
}

impl std::fmt::Display for DigitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check if a character is a key character (0-9, '+', ',', '*', '#')
#[inline]
pub fn is_valid_key_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | ',' | '*' | '#')
}

/// Check if every character of `key` is a key character
pub fn is_valid_key(key: &str) -> bool {
    key.chars().all(is_valid_key_char)
}

/// Map a Latin letter to its key digit, `None` for anything that is not A-Z / a-z
#[inline]
pub fn letter_to_digit_class(c: char) -> Option<DigitClass> {
    if c.is_ascii_alphabetic() {
        let offset = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(DigitClass(LETTER_T9_MAP[offset]))
    } else {
        None
    }
}

/// Digit class a raw name character contributes to a key
///
/// Letters go through the keypad layout, key characters pass through unchanged,
/// everything else contributes nothing.
#[inline]
pub fn to_key_digit(c: char) -> Option<DigitClass> {
    letter_to_digit_class(c).or_else(|| DigitClass::from_char(c))
}

/// Check if a character is any initial marker
#[inline]
pub fn is_initial_marker(c: char) -> bool {
    c.is_ascii() && is_initial_byte(c as u8)
}

#[inline]
pub(crate) fn is_initial_byte(b: u8) -> bool {
    (INITIAL_BASE..=INITIAL_LAST).contains(&b)
}

/// Convert a lookup index to its key character
///
/// # Errors
/// `T9Error::InvalidIndex` when `index > 13`
pub fn index_to_key_char(index: usize) -> Result<char, T9Error> {
    VALID_T9_KEYS
        .get(index)
        .copied()
        .ok_or(T9Error::InvalidIndex { index })
}

/// Convert a key character to its lookup index
///
/// # Errors
/// `T9Error::InvalidKey` when `c` is not a key character
pub fn key_char_to_index(c: char) -> Result<usize, T9Error> {
    DigitClass::from_char(c)
        .map(DigitClass::index)
        .ok_or(T9Error::InvalidKey { char: c })
}

/// Count word units of `key` in `start..end`
///
/// A unit begins at `start`, at every space and at every initial marker, so the
/// result is the word index of position `end` relative to `start`.
pub fn word_count(key: &[u8], start: usize, end: usize) -> usize {
    let end = end.min(key.len());
    (start..end)
        .filter(|&i| i == start || key[i] == b' ' || is_initial_byte(key[i]))
        .count()
}
