// T9 Search Type Definitions
// Core types shared by the encoder, matcher and roster search

use thiserror::Error;

/// Kind of a phonetic token produced at the transliteration boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII or extended-Latin run, target is the source text unchanged
    Latin,

    /// Romanized syllable for a single character (e.g. "zhang" for 张)
    Phonetic,

    /// Character without a usable rendering, target is the source text unchanged
    Unknown,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Latin => write!(f, "Latin"),
            TokenKind::Phonetic => write!(f, "Phonetic"),
            TokenKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One unit of a transliterated name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticToken {
    /// Token kind
    pub kind: TokenKind,

    /// Original text before transliteration
    pub source: String,

    /// Romanized syllable for `Phonetic`, otherwise the source text
    pub target: String,
}

impl PhoneticToken {
    /// Create a token with an explicit source and target
    pub fn new(kind: TokenKind, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
        }
    }

    /// Latin run whose target equals its source
    pub fn latin(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(TokenKind::Latin, text.clone(), text)
    }

    /// Phonetic syllable; the source is the character it was rendered from
    pub fn phonetic(source: impl Into<String>, syllable: impl Into<String>) -> Self {
        Self::new(TokenKind::Phonetic, source, syllable)
    }

    /// Untranslatable run whose target equals its source
    pub fn unknown(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(TokenKind::Unknown, text.clone(), text)
    }
}

/// Keypad and query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum T9Error {
    #[error("Invalid T9 index {index}: expected 0-13")]
    InvalidIndex { index: usize },

    #[error("Invalid T9 key character '{char}': only 0-9, '+', ',', '*', '#' allowed")]
    InvalidKey { char: char },

    #[error("Invalid character '{char}' in query: only 0-9, '+', ',', '*', '#' allowed")]
    InvalidQuery { char: char },
}

/// Runtime options for a roster search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits returned, `None` for all
    pub limit: Option<usize>,

    /// Also match the query against phone numbers
    pub match_numbers: bool,
}

impl SearchOptions {
    /// Create options with no limit and phone-number matching enabled
    pub fn new() -> Self {
        Self {
            limit: None,
            match_numbers: true,
        }
    }

    /// Cap the number of hits
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enable or disable phone-number matching
    pub fn with_number_matching(mut self, enabled: bool) -> Self {
        self.match_numbers = enabled;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}
