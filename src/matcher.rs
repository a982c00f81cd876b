// T9 Search Matcher
// Backtracking match of typed digits against T9 keys and phone numbers

use crate::bitset::MarkBits;
use crate::keypad::{is_initial_byte, is_valid_key, word_count, DigitClass};
use crate::pool::MARK_POOL;
use crate::span::MatchSpan;

/// Separator between independent keys joined into one searchable key
pub const KEY_DIVIDER: char = '|';

const DIVIDER_BYTE: u8 = KEY_DIVIDER as u8;

/// Join independent T9 keys so they can be matched as one
///
/// Matching never crosses a divider: each partition is tried on its own.
pub fn join_keys<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            joined.push(KEY_DIVIDER);
        }
        joined.push_str(key.as_ref());
    }
    joined
}

/// Match a single typed digit against the initials of `key`
///
/// Finds the first initial marker for `digit`; the span starts at the word
/// index of that initial within its partition and covers one word.
///
/// # Examples
/// ```
/// # use t9_search::match_single;
/// // "Zhang San"
/// let span = match_single("Y4264W26", '7');
/// assert_eq!(span.start(), Some(1));
/// assert_eq!(span.len(), 1);
/// ```
pub fn match_single(key: &str, digit: char) -> MatchSpan {
    let Some(class) = DigitClass::from_char(digit) else {
        return MatchSpan::none();
    };

    let key = key.as_bytes();
    let initial = class.initial_byte();
    let Some(index) = key.iter().position(|&b| b == initial) else {
        return MatchSpan::none();
    };

    let begin = key[..index]
        .iter()
        .rposition(|&b| b == DIVIDER_BYTE)
        .map_or(0, |divider| divider + 1);

    MatchSpan::new(word_count(key, begin, index), 1)
}

/// Match a typed digit sequence against `key`
///
/// Candidates are tried leftmost first at every initial equal to the first
/// digit; the first candidate that matches wins. Consecutive digits may
/// continue inside the current word, hop to the next word's initial, or
/// consume the whole current word and then hop.
///
/// # Returns
/// A chain of disjoint word spans, or an empty span when nothing matches,
/// when either input is empty, or when the constraint has non-key characters
///
/// # Examples
/// ```
/// # use t9_search::match_sequence;
/// // "Zhang San Feng", typing the three initials
/// let span = match_sequence("Y4264W26S364", "973");
/// assert_eq!(span.start(), Some(0));
/// assert_eq!(span.len(), 3);
/// ```
pub fn match_sequence(key: &str, constraint: &str) -> MatchSpan {
    if key.is_empty() || constraint.is_empty() || !is_valid_key(constraint) {
        return MatchSpan::none();
    }

    if constraint.len() == 1 {
        return match constraint.chars().next() {
            Some(digit) => match_single(key, digit),
            None => MatchSpan::none(),
        };
    }

    let key = key.as_bytes();
    let constraint = constraint.as_bytes();

    let mut begin = 0;
    loop {
        let end = key[begin..]
            .iter()
            .position(|&b| b == DIVIDER_BYTE)
            .map_or(key.len(), |offset| begin + offset);

        if begin < end {
            let partition = Partition {
                key,
                begin,
                end,
                constraint,
            };
            let span = partition.find();
            if span.found() {
                return span;
            }
        }

        if end >= key.len() {
            return MatchSpan::none();
        }
        begin = end + 1;
    }
}

/// Match a typed digit sequence as a substring of a phone number
///
/// Offsets and lengths are in characters.
///
/// # Examples
/// ```
/// # use t9_search::match_number;
/// let span = match_number("5551234", "123");
/// assert_eq!(span.start(), Some(3));
/// assert_eq!(span.len(), 3);
/// ```
pub fn match_number(phone_number: &str, constraint: &str) -> MatchSpan {
    if phone_number.is_empty() || constraint.is_empty() {
        return MatchSpan::none();
    }

    match phone_number.find(constraint) {
        Some(index) => MatchSpan::new(
            phone_number[..index].chars().count(),
            constraint.chars().count(),
        ),
        None => MatchSpan::none(),
    }
}

/// One divider-delimited slice of a key and the constraint being matched
struct Partition<'a> {
    key: &'a [u8],
    begin: usize,
    end: usize,
    constraint: &'a [u8],
}

impl Partition<'_> {
    /// Leftmost match within `begin..end`
    fn find(&self) -> MatchSpan {
        let len = self.constraint.len();
        if self.end - self.begin < len {
            return MatchSpan::none();
        }

        let first = initial_of(self.constraint[0]);
        let last_candidate = self.end - len;
        let mut marks = MARK_POOL.take();
        // (start, constraint offset) states already known to fail
        let mut failed = MARK_POOL.take();

        for index in self.begin..=last_candidate {
            if self.key[index] != first {
                continue;
            }

            marks.clear();
            if self.try_match(index, 0, &mut marks, &mut failed) > 0 {
                return self.spans_from_marks(&marks);
            }
        }

        MatchSpan::none()
    }

    /// Memoized [`extend`](Self::extend): a failing state is explored once
    fn try_match(
        &self,
        start: usize,
        c_start: usize,
        marks: &mut MarkBits,
        failed: &mut MarkBits,
    ) -> usize {
        let state = (start - self.begin) * self.constraint.len() + c_start;
        if failed.is_set(state) {
            return 0;
        }

        let matched = self.extend(start, c_start, marks, failed);
        if matched == 0 {
            failed.set(state);
        }
        matched
    }

    /// Try to match `constraint[c_start..]` starting at the initial at `start`
    ///
    /// `key[start]` already matches `constraint[c_start]`. Marks every key
    /// position that took part, relative to `begin`.
    ///
    /// # Returns
    /// Number of matched units, 0 on failure
    fn extend(
        &self,
        start: usize,
        c_start: usize,
        marks: &mut MarkBits,
        failed: &mut MarkBits,
    ) -> usize {
        let remaining = self.constraint.len() - c_start;
        let next = self.next_initial(start + 1);
        let span = self.word_span(start, next);
        let offset = start - self.begin;

        // rest of the constraint inside the current word
        if remaining <= span && self.region_matches(start + 1, c_start + 1, remaining - 1) {
            marks.set_range(offset, offset + remaining);
            return 1;
        }

        if next == self.end {
            return 0;
        }

        let next_offset = next - self.begin;

        // hop to the next word's initial
        if initial_of(self.constraint[c_start + 1]) == self.key[next] {
            if remaining == 2 {
                marks.set(offset);
                marks.set(next_offset);
                return 2;
            }

            let matched = self.try_match(next, c_start + 1, marks, failed);
            if matched > 0 {
                marks.set(offset);
                return matched + 1;
            }
        }

        // consume the whole current word, then hop; a one-character word
        // was already tried as an initial hop
        if span > 1
            && remaining > span
            && initial_of(self.constraint[c_start + span]) == self.key[next]
            && self.region_matches(start + 1, c_start + 1, span - 1)
        {
            if c_start + span + 1 == self.constraint.len() {
                marks.set_range(offset, next_offset + 1);
                return 2;
            }

            let matched = self.try_match(next, c_start + span, marks, failed);
            if matched > 0 {
                marks.set_range(offset, next_offset);
                return matched + 1;
            }
        }

        0
    }

    /// First initial marker at or after `from`, or `end`
    fn next_initial(&self, from: usize) -> usize {
        (from..self.end)
            .find(|&i| is_initial_byte(self.key[i]))
            .unwrap_or(self.end)
    }

    /// Length of the word `start..next` without trailing spaces
    fn word_span(&self, start: usize, next: usize) -> usize {
        let mut span = next - start;
        while span > 1 && self.key[start + span - 1] == b' ' {
            span -= 1;
        }
        span
    }

    /// Compare `len` plain key characters at `from` with the constraint at `c_from`
    fn region_matches(&self, from: usize, c_from: usize, len: usize) -> bool {
        if from + len > self.end || c_from + len > self.constraint.len() {
            return false;
        }
        self.key[from..from + len] == self.constraint[c_from..c_from + len]
    }

    /// Collapse per-character marks into word spans
    fn spans_from_marks(&self, marks: &MarkBits) -> MatchSpan {
        let mut runs = Vec::new();
        let mut words = 0;
        let mut run_start = None;

        for i in self.begin..self.end {
            let c = self.key[i];
            if i != self.begin && c != b' ' && !is_initial_byte(c) {
                continue;
            }

            if c != b' ' && marks.is_set(i - self.begin) {
                run_start.get_or_insert(words);
            } else if let Some(start) = run_start.take() {
                runs.push((start, words - start));
            }
            words += 1;
        }

        if let Some(start) = run_start {
            runs.push((start, words - start));
        }

        MatchSpan::from_runs(runs)
    }
}

/// Initial-marker byte for a validated constraint byte
#[inline]
fn initial_of(b: u8) -> u8 {
    DigitClass::from_char(b as char).map_or(0, DigitClass::initial_byte)
}
