// T9 Search Match Spans
// Linked match result: one or more disjoint matched runs in left-to-right order

use std::fmt;
use std::ops::Range;

/// Result of matching a constraint against a key or phone number
///
/// A found span covers `len` units starting at `start`. Units are words for
/// name keys and characters for phone numbers. Multi-region matches chain
/// further spans through [`next`](Self::next).
///
/// Invariant: `found() == start().is_some() == (len() > 0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSpan {
    start: Option<usize>,
    len: usize,
    next: Option<Box<MatchSpan>>,
}

impl MatchSpan {
    /// Not-found result
    pub fn none() -> Self {
        Self::default()
    }

    /// Found span of `len` units at `start`
    ///
    /// # Panics
    /// If `len` is zero: a found span always covers at least one unit
    pub fn new(start: usize, len: usize) -> Self {
        assert!(
            len > 0,
            "INVALID MATCH OFFSETS: start={start}, length={len}"
        );
        Self {
            start: Some(start),
            len,
            next: None,
        }
    }

    /// Build a chain from runs of `(start, len)` in left-to-right order
    pub(crate) fn from_runs<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
        I::IntoIter: DoubleEndedIterator,
    {
        runs.into_iter().rev().fold(Self::none(), |next, (start, len)| {
            let mut span = Self::new(start, len);
            if next.found() {
                span.next = Some(Box::new(next));
            }
            span
        })
    }

    /// Whether anything matched
    #[inline]
    pub fn found(&self) -> bool {
        self.start.is_some()
    }

    /// First matched unit, `None` if not found
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Number of matched units in this link, 0 if not found
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this link is empty (not found)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Next disjoint span of the same match
    pub fn next(&self) -> Option<&MatchSpan> {
        self.next.as_deref()
    }

    /// Whether another span follows
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Iterate the found links of the chain
    pub fn iter(&self) -> Spans<'_> {
        Spans {
            cursor: self.found().then_some(self),
        }
    }

    /// Sum of matched units across the whole chain
    pub fn total_len(&self) -> usize {
        self.iter().map(MatchSpan::len).sum()
    }

    /// Character ranges to highlight in a display text of `text_len` characters
    ///
    /// Spans reaching past the text are skipped.
    pub fn highlight_ranges(&self, text_len: usize) -> Vec<Range<usize>> {
        self.iter()
            .filter_map(|span| {
                let start = span.start?;
                let end = start + span.len;
                (start < text_len && end <= text_len).then_some(start..end)
            })
            .collect()
    }
}

impl fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found() {
            return write!(f, "not found");
        }
        for (i, span) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "[{}+{}]", span.start.unwrap_or_default(), span.len)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MatchSpan {
    type Item = &'a MatchSpan;
    type IntoIter = Spans<'a>;

    fn into_iter(self) -> Spans<'a> {
        self.iter()
    }
}

/// Iterator over the links of a [`MatchSpan`] chain
pub struct Spans<'a> {
    cursor: Option<&'a MatchSpan>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a MatchSpan;

    fn next(&mut self) -> Option<&'a MatchSpan> {
        let current = self.cursor?;
        self.cursor = current.next();
        Some(current)
    }
}
