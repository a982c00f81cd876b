//! # T9 Search: Keypad Predictive Search
//!
//! Finds roster entries whose name initials or phone number match digits typed
//! on a 12-key telephone pad, and reports where they matched so a front end can
//! highlight them.
//!
//! ## How Names Are Matched
//!
//! 1. **Tokenize** - A name is split into phonetic tokens; Han characters go
//!    through a [`Transliterator`], Latin text is kept as is
//! 2. **Encode** - Tokens become a T9 key: one character per source character,
//!    either a word-initial marker, a plain digit, or a space
//! 3. **Match** - Typed digits are matched against the key by backtracking over
//!    word initials, yielding word spans
//!
//! ## Example Usage
//!
//! ```
//! use t9_search::{Contact, MapTransliterator, T9Search};
//!
//! let pinyin = MapTransliterator::new()
//!     .with('张', "zhang")
//!     .with('三', "san");
//!
//! let search = T9Search::from_contacts(vec![
//!     Contact::from_name("张三", "13800001111", &pinyin),
//!     Contact::from_name("Bob", "555 0100", &pinyin),
//! ]);
//!
//! // "zs" typed as initials
//! let hits = search.search("97")?;
//! assert_eq!(hits[0].contact.name, "张三");
//! assert_eq!(hits[0].name_highlights(), vec![0..2]);
//!
//! // phone number substring
//! let hits = search.search("0100")?;
//! assert_eq!(hits[0].contact.name, "Bob");
//! # Ok::<(), t9_search::T9Error>(())
//! ```
//!
//! ## Architecture
//!
//! - **Keypad** - Digit classes, letter layout and initial markers
//! - **Key Encoder** - Phonetic tokens to T9 key strings
//! - **Matcher** - Single digit, digit sequence and phone number matching
//! - **Match Spans** - Linked, multi-region match results
//! - **Ranking** - Orders hits by match quality
//! - **Pool** - Reusable scratch buffers for the encode/match hot path

pub mod bitset;
pub mod contact;
pub mod encoder;
pub mod keypad;
pub mod matcher;
pub mod pool;
pub mod rank;
pub mod search;
pub mod span;
pub mod transliterate;
pub mod types;

// Re-export main types and functions for convenience
pub use bitset::MarkBits;
pub use contact::{normalize_phone_number, Contact};
pub use encoder::{encode_key, format_non_phonetic, format_phonetic};
pub use keypad::{
    index_to_key_char, is_initial_marker, is_valid_key, is_valid_key_char, key_char_to_index,
    letter_to_digit_class, to_key_digit, word_count, DigitClass,
};
pub use matcher::{join_keys, match_number, match_sequence, match_single, KEY_DIVIDER};
pub use pool::{Pool, Pooled, Recycle, POOL_CAPACITY};
pub use rank::{compare_hits, compare_ignore_case};
pub use search::{SearchHit, T9Search};
pub use span::{MatchSpan, Spans};
pub use transliterate::{tokenize, MapTransliterator, NoTransliteration, Transliterator};
pub use types::{PhoneticToken, SearchOptions, T9Error, TokenKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
