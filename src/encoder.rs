// T9 Search Key Encoder
// Converts phonetic token sequences into T9 key strings

use crate::keypad::to_key_digit;
use crate::pool::STRING_POOL;
use crate::types::{PhoneticToken, TokenKind};

/// Build the T9 key for a token sequence
///
/// Each input character becomes one key character:
/// - a space when it has no digit class (punctuation, unknown scripts)
/// - an initial marker when a new word may start here
/// - otherwise the plain digit class
///
/// Phonetic syllables are capitalized so each contributes exactly one initial;
/// Latin and unknown runs are uppercased so every letter is an initial.
///
/// # Examples
/// ```
/// use t9_search::{encode_key, PhoneticToken};
///
/// let key = encode_key(&[
///     PhoneticToken::phonetic("张", "zhang"),
///     PhoneticToken::phonetic("三", "san"),
/// ]);
/// assert_eq!(key, "Y4264W26");
///
/// let key = encode_key(&[PhoneticToken::latin("Bob 2x")]);
/// assert_eq!(key, "RVR RY");
/// ```
pub fn encode_key(tokens: &[PhoneticToken]) -> String {
    let mut formatted = STRING_POOL.take();

    for token in tokens {
        match token.kind {
            TokenKind::Phonetic => format_phonetic_into(&token.target, &mut formatted),
            TokenKind::Latin | TokenKind::Unknown => {
                format_non_phonetic_into(&token.target, &mut formatted)
            }
        }
    }

    convert_to_key(&formatted)
}

/// Capitalize a syllable: first letter uppercase, the rest lowercase
///
/// # Examples
/// ```
/// # use t9_search::format_phonetic;
/// assert_eq!(format_phonetic("ZHANG"), "Zhang");
/// ```
pub fn format_phonetic(syllable: &str) -> String {
    let mut out = String::with_capacity(syllable.len());
    format_phonetic_into(syllable, &mut out);
    out
}

/// Uppercase every letter, leaving other characters untouched
pub fn format_non_phonetic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    format_non_phonetic_into(text, &mut out);
    out
}

fn format_phonetic_into(syllable: &str, out: &mut String) {
    let mut chars = syllable.chars();
    if let Some(first) = chars.next() {
        out.push(single_char_case(first, first.to_uppercase()));
    }
    for c in chars {
        out.push(single_char_case(c, c.to_lowercase()));
    }
}

fn format_non_phonetic_into(text: &str, out: &mut String) {
    for c in text.chars() {
        if c.is_alphabetic() {
            out.push(single_char_case(c, c.to_uppercase()));
        } else {
            out.push(c);
        }
    }
}

/// Case-mapped `c`, or `c` itself when the mapping expands ('ß' → "SS")
///
/// Keys hold exactly one character per name character.
#[inline]
fn single_char_case(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Whether `c` opens a new word given the previous raw character
#[inline]
fn starts_word(c: char, last: char, first: bool) -> bool {
    first
        || c.is_uppercase()
        || (c.is_alphabetic() && !last.is_alphabetic())
        || (c.is_numeric() && !last.is_numeric())
        || crate::keypad::is_valid_key_char(c)
}

fn convert_to_key(input: &str) -> String {
    let mut key = STRING_POOL.take();
    let mut last = ' ';

    for (i, c) in input.chars().enumerate() {
        match to_key_digit(c) {
            None => key.push(' '),
            Some(class) if starts_word(c, last, i == 0) => key.push(class.initial()),
            Some(class) => key.push(class.as_char()),
        }
        last = c;
    }

    key.as_str().to_owned()
}
