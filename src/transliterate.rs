// T9 Search Transliteration
// Phonetic lookup boundary and name tokenization

use crate::types::{PhoneticToken, TokenKind};
use rustc_hash::FxHashMap;

/// Phonetic lookup for a single character
///
/// Returns zero or more romanized renderings; only the first is used.
pub trait Transliterator {
    fn translate(&self, c: char) -> Vec<String>;
}

impl<F> Transliterator for F
where
    F: Fn(char) -> Vec<String>,
{
    fn translate(&self, c: char) -> Vec<String> {
        self(c)
    }
}

/// Backend without any renderings; every non-Latin character is unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransliteration;

impl Transliterator for NoTransliteration {
    fn translate(&self, _c: char) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory rendering table
#[derive(Debug, Clone, Default)]
pub struct MapTransliterator {
    table: FxHashMap<char, Vec<String>>,
}

impl MapTransliterator {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add renderings for a character, replacing any previous ones
    pub fn insert<I, S>(&mut self, c: char, renderings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .insert(c, renderings.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`insert`](Self::insert) for a single rendering
    pub fn with(mut self, c: char, rendering: &str) -> Self {
        self.insert(c, [rendering]);
        self
    }

    /// Number of characters with renderings
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for MapTransliterator {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (c, rendering) in iter {
            map.insert(c, [rendering]);
        }
        map
    }
}

impl Transliterator for MapTransliterator {
    fn translate(&self, c: char) -> Vec<String> {
        self.table.get(&c).cloned().unwrap_or_default()
    }
}

/// Split a display name into phonetic tokens
///
/// # Token Rules
/// - ASCII and extended Latin (below U+0250, U+1E00-U+1EFF): `Latin`
/// - Characters with a rendering that starts with a letter: `Phonetic`,
///   one token per character
/// - Anything else: `Unknown`
///
/// Consecutive non-phonetic characters of the same kind share a token.
///
/// # Examples
/// ```
/// use t9_search::{tokenize, MapTransliterator, TokenKind};
///
/// let pinyin = MapTransliterator::new().with('张', "ZHANG");
/// let tokens = tokenize("Bob张", &pinyin);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Latin);
/// assert_eq!(tokens[1].target, "ZHANG");
/// ```
pub fn tokenize<T>(input: &str, transliterator: &T) -> Vec<PhoneticToken>
where
    T: Transliterator + ?Sized,
{
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_kind = TokenKind::Latin;

    for c in input.chars() {
        let (kind, target) = classify(c, transliterator);

        if kind == TokenKind::Phonetic {
            flush(&mut run, run_kind, &mut tokens);
            tokens.push(PhoneticToken::phonetic(c.to_string(), target));
        } else {
            if kind != run_kind {
                flush(&mut run, run_kind, &mut tokens);
            }
            run.push_str(&target);
        }
        run_kind = kind;
    }
    flush(&mut run, run_kind, &mut tokens);

    tokens
}

fn flush(run: &mut String, kind: TokenKind, tokens: &mut Vec<PhoneticToken>) {
    if !run.is_empty() {
        let text = std::mem::take(run);
        tokens.push(PhoneticToken::new(kind, text.clone(), text));
    }
}

fn classify<T>(c: char, transliterator: &T) -> (TokenKind, String)
where
    T: Transliterator + ?Sized,
{
    if is_latin(c) {
        return (TokenKind::Latin, c.to_string());
    }

    let rendering = transliterator.translate(c).into_iter().next();
    match rendering {
        Some(target)
            if target.chars().next().is_some_and(char::is_alphabetic)
                && target != c.to_string() =>
        {
            (TokenKind::Phonetic, target)
        }
        _ => {
            tracing::trace!(character = %c, "no phonetic rendering");
            (TokenKind::Unknown, c.to_string())
        }
    }
}

#[inline]
fn is_latin(c: char) -> bool {
    (c as u32) < 0x250 || ('\u{1E00}'..'\u{1EFF}').contains(&c)
}
