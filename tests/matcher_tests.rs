// Integration tests for the match engine

use std::time::{Duration, Instant};
use t9_search::{
    encode_key, join_keys, match_number, match_sequence, match_single, tokenize, MatchSpan,
    NoTransliteration, PhoneticToken,
};

fn links(span: &MatchSpan) -> Vec<(usize, usize)> {
    span.iter()
        .map(|s| (s.start().unwrap_or_default(), s.len()))
        .collect()
}

fn syllables(parts: &[&str]) -> String {
    let tokens: Vec<_> = parts
        .iter()
        .map(|p| PhoneticToken::phonetic(*p, *p))
        .collect();
    encode_key(&tokens)
}

// ============ Single Digit ============

#[test]
fn test_single_digit_finds_first_initial() {
    let key = syllables(&["li", "li", "si"]);
    assert_eq!(key, "U4U4W4");
    assert_eq!(links(&match_single(&key, '5')), vec![(0, 1)]);
    assert_eq!(links(&match_single(&key, '7')), vec![(2, 1)]);
}

#[test]
fn test_single_digit_via_sequence() {
    let key = syllables(&["zhang", "san"]);
    assert_eq!(match_sequence(&key, "7"), match_single(&key, '7'));
}

#[test]
fn test_single_digit_counts_within_partition() {
    let key = join_keys([syllables(&["li", "si"]), syllables(&["zhang", "san"])]);
    assert_eq!(key, "U4W4|Y4264W26");
    assert_eq!(links(&match_single(&key, '9')), vec![(0, 1)]);
    assert_eq!(links(&match_single(&key, '7')), vec![(1, 1)]);
}

// ============ Digit Sequences ============

#[test]
fn test_leftmost_candidate_wins() {
    let key = syllables(&["li", "san", "li", "si"]);
    // both "li si" and "li san" start with 5-7; the first candidate matches
    assert_eq!(links(&match_sequence(&key, "57")), vec![(0, 2)]);
}

#[test]
fn test_later_candidate_after_failure() {
    let key = syllables(&["li", "san", "li", "si"]);
    // the first "li" is followed by "san", so "li" + "s" + "i" fails there
    assert_eq!(links(&match_sequence(&key, "5474")), vec![(2, 2)]);
}

#[test]
fn test_trailing_space_ends_word() {
    let key = encode_key(&[
        PhoneticToken::phonetic("Anna", "Anna"),
        PhoneticToken::latin(" "),
        PhoneticToken::phonetic("Lee", "Lee"),
    ]);
    assert_eq!(key, "R662 U33");

    assert_eq!(links(&match_sequence(&key, "25")), vec![(0, 1), (2, 1)]);
    assert_eq!(links(&match_sequence(&key, "26625")), vec![(0, 1), (2, 1)]);
    assert_eq!(links(&match_sequence(&key, "2662")), vec![(0, 1)]);
}

#[test]
fn test_no_match_returns_empty() {
    let key = syllables(&["zhang", "san"]);
    let span = match_sequence(&key, "888");
    assert!(!span.found());
    assert_eq!(span.start(), None);
    assert_eq!(span.len(), 0);
    assert!(!span.has_next());
}

#[test]
fn test_long_name_recursion() {
    let parts = vec!["a"; 40];
    let key = syllables(&parts);
    let constraint = "2".repeat(40);

    let span = match_sequence(&key, &constraint);
    assert_eq!(links(&span), vec![(0, 40)]);
}

#[test]
fn test_long_latin_name_without_match() {
    let name = "A".repeat(42);
    let key = encode_key(&tokenize(&name, &NoTransliteration));
    let constraint = format!("{}3", "2".repeat(40));

    let start = Instant::now();
    let span = match_sequence(&key, &constraint);
    assert!(!span.found());
    assert!(start.elapsed() < Duration::from_secs(1));
}

// ============ Partitions ============

#[test]
fn test_matching_never_crosses_divider() {
    let joined = join_keys([syllables(&["zhang"]), syllables(&["san"])]);
    assert!(!match_sequence(&joined, "97").found());

    let plain = syllables(&["zhang", "san"]);
    assert!(match_sequence(&plain, "97").found());
}

#[test]
fn test_first_matching_partition_wins() {
    let key = join_keys([syllables(&["zhang", "san"]), syllables(&["yan"])]);
    assert_eq!(key, "Y4264W26|Y26");

    // "yan" only fits the second partition; offsets restart there
    assert_eq!(links(&match_sequence(&key, "926")), vec![(0, 1)]);
    assert_eq!(links(&match_sequence(&key, "97")), vec![(0, 2)]);
}

#[test]
fn test_empty_partitions_skipped() {
    let key = format!("||{}|", syllables(&["zhang", "san"]));
    assert_eq!(links(&match_sequence(&key, "97")), vec![(0, 2)]);
}

// ============ Phone Numbers ============

#[test]
fn test_number_substring() {
    assert_eq!(links(&match_number("5551234", "123")), vec![(3, 3)]);
    assert_eq!(links(&match_number("13800001111", "0000")), vec![(3, 4)]);
}

#[test]
fn test_number_first_occurrence() {
    assert_eq!(links(&match_number("121212", "12")), vec![(0, 2)]);
    assert_eq!(links(&match_number("+8612", "12")), vec![(3, 2)]);
}

#[test]
fn test_number_empty_inputs() {
    assert!(!match_number("", "1").found());
    assert!(!match_number("123", "").found());
}
