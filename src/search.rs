// T9 Search Engine
// Main API that filters a roster against a typed digit query

use crate::contact::Contact;
use crate::keypad::is_valid_key_char;
use crate::matcher::{match_number, match_sequence};
use crate::rank::compare_hits;
use crate::span::MatchSpan;
use crate::types::{SearchOptions, T9Error};

/// A roster entry that matched a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Matching contact
    pub contact: &'a Contact,

    /// Word spans of the name that matched, possibly chained
    pub name_match: MatchSpan,

    /// Character span of the phone number that matched
    pub number_match: MatchSpan,
}

impl SearchHit<'_> {
    /// Name ranges to highlight, in characters of the display name
    pub fn name_highlights(&self) -> Vec<std::ops::Range<usize>> {
        self.name_match
            .highlight_ranges(self.contact.name.chars().count())
    }

    /// Phone number ranges to highlight
    pub fn number_highlights(&self) -> Vec<std::ops::Range<usize>> {
        self.number_match
            .highlight_ranges(self.contact.phone_number.chars().count())
    }
}

/// Main T9 search engine
///
/// Combines all components:
/// - Name matching (T9 key backtracking)
/// - Phone number matching (substring)
/// - Ranking (name quality first, then number position)
#[derive(Debug, Clone, Default)]
pub struct T9Search {
    /// Roster in insertion order
    contacts: Vec<Contact>,

    /// Result limit and number matching
    options: SearchOptions,
}

impl T9Search {
    /// Create an empty engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over an existing roster
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            options: SearchOptions::default(),
        }
    }

    /// Replace the search options
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a contact to the roster
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Roster in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Current options
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Execute a search query
    ///
    /// # Arguments
    /// * `query` - Typed digits (e.g., "726", "138")
    ///
    /// # Returns
    /// Matching contacts, best first, capped by the configured limit. An empty
    /// query yields no hits.
    ///
    /// # Errors
    /// `T9Error::InvalidQuery` if the query contains a non-key character
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<'_>>, T9Error> {
        self.run(query, self.options.limit)
    }

    /// Search with a limit on results, overriding the configured one
    pub fn search_limit(&self, query: &str, limit: usize) -> Result<Vec<SearchHit<'_>>, T9Error> {
        self.run(query, Some(limit))
    }

    /// Search on the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn par_search(&self, query: &str) -> Result<Vec<SearchHit<'_>>, T9Error> {
        use rayon::prelude::*;

        if !validate_query(query)? {
            return Ok(Vec::new());
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .contacts
            .par_iter()
            .filter_map(|contact| self.match_contact(contact, query))
            .collect();
        hits.par_sort_by(compare_hits);
        Ok(self.finish(query, hits, self.options.limit))
    }

    fn run(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit<'_>>, T9Error> {
        if !validate_query(query)? {
            return Ok(Vec::new());
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .contacts
            .iter()
            .filter_map(|contact| self.match_contact(contact, query))
            .collect();
        hits.sort_by(compare_hits);
        Ok(self.finish(query, hits, limit))
    }

    fn match_contact<'a>(&self, contact: &'a Contact, query: &str) -> Option<SearchHit<'a>> {
        let name_match = match_sequence(&contact.t9_key, query);
        let number_match = if self.options.match_numbers {
            match_number(&contact.phone_number, query)
        } else {
            MatchSpan::none()
        };

        (name_match.found() || number_match.found()).then_some(SearchHit {
            contact,
            name_match,
            number_match,
        })
    }

    fn finish<'a>(
        &self,
        query: &str,
        mut hits: Vec<SearchHit<'a>>,
        limit: Option<usize>,
    ) -> Vec<SearchHit<'a>> {
        tracing::debug!(
            query,
            roster = self.contacts.len(),
            hits = hits.len(),
            "t9 search"
        );
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        hits
    }
}

/// `Ok(false)` for an empty query
fn validate_query(query: &str) -> Result<bool, T9Error> {
    if let Some(c) = query.chars().find(|&c| !is_valid_key_char(c)) {
        return Err(T9Error::InvalidQuery { char: c });
    }
    Ok(!query.is_empty())
}
