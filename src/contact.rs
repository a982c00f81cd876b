// T9 Search Contacts
// Roster entries with their precomputed T9 keys

use crate::encoder::encode_key;
use crate::transliterate::{tokenize, Transliterator};
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a key character
static NON_KEY_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9+,*#]").expect("non-key character class compiles"));

/// A roster entry: display name, phone number and the name's T9 key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name (e.g., "张三" or "Anna Lee")
    pub name: String,

    /// Phone number without separators
    pub phone_number: String,

    /// Encoded name, see [`encode_key`]
    pub t9_key: String,
}

impl Contact {
    /// Create a contact from an already encoded key
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        t9_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            t9_key: t9_key.into(),
        }
    }

    /// Create a contact, encoding the name and normalizing the phone number
    ///
    /// # Example
    /// ```
    /// # use t9_search::{Contact, NoTransliteration};
    /// let contact = Contact::from_name("Bob", "555-0100", &NoTransliteration);
    /// assert_eq!(contact.t9_key, "RVR");
    /// assert_eq!(contact.phone_number, "5550100");
    /// ```
    pub fn from_name<T>(name: &str, phone_number: &str, transliterator: &T) -> Self
    where
        T: Transliterator + ?Sized,
    {
        Self {
            name: name.to_string(),
            phone_number: normalize_phone_number(phone_number),
            t9_key: encode_key(&tokenize(name, transliterator)),
        }
    }
}

/// Strip separators and anything else that is not a key character
pub fn normalize_phone_number(raw: &str) -> String {
    NON_KEY_CHARS.replace_all(raw, "").into_owned()
}
