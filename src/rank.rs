// T9 Search Ranking
// Orders roster hits by name-match quality, then by phone-number match

use crate::search::SearchHit;
use crate::span::MatchSpan;
use std::cmp::Ordering;

/// Compare two hits, best first
///
/// 1. A found name match sorts before a missing one.
/// 2. Between name matches: earlier start, then longer total match, then fewer
///    unmatched characters, then the name ignoring case.
/// 3. Without name matches: a found number match sorts first, then earlier
///    start, then the phone number ignoring case.
pub fn compare_hits(left: &SearchHit<'_>, right: &SearchHit<'_>) -> Ordering {
    match (left.name_match.found(), right.name_match.found()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (true, true) => {
            return compare_name_matches(
                &left.contact.name,
                &left.name_match,
                &right.contact.name,
                &right.name_match,
            )
        }
        (false, false) => {}
    }

    match (left.number_match.found(), right.number_match.found()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => left
            .number_match
            .start()
            .cmp(&right.number_match.start())
            .then_with(|| {
                compare_ignore_case(&left.contact.phone_number, &right.contact.phone_number)
            }),
        (false, false) => Ordering::Equal,
    }
}

fn compare_name_matches(
    left_name: &str,
    left: &MatchSpan,
    right_name: &str,
    right: &MatchSpan,
) -> Ordering {
    let left_len = left.total_len();
    let right_len = right.total_len();

    left.start()
        .cmp(&right.start())
        .then_with(|| right_len.cmp(&left_len))
        .then_with(|| unmatched(left_name, left_len).cmp(&unmatched(right_name, right_len)))
        .then_with(|| compare_ignore_case(left_name, right_name))
}

/// Characters of `name` not covered by the match
#[inline]
fn unmatched(name: &str, matched: usize) -> i64 {
    name.chars().count() as i64 - matched as i64
}

/// Lexicographic comparison ignoring case
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    fn hit<'a>(contact: &'a Contact, name: MatchSpan, number: MatchSpan) -> SearchHit<'a> {
        SearchHit {
            contact,
            name_match: name,
            number_match: number,
        }
    }

    fn contact(name: &str, phone: &str) -> Contact {
        Contact::new(name, phone, "")
    }

    #[test]
    fn test_ignore_case() {
        assert_eq!(compare_ignore_case("abc", "ABC"), Ordering::Equal);
        assert_eq!(compare_ignore_case("Abc", "abd"), Ordering::Less);
        assert_eq!(compare_ignore_case("b", "A"), Ordering::Greater);
    }

    #[test]
    fn test_name_match_beats_number_match() {
        let a = contact("Anna", "111");
        let b = contact("Bob", "222");
        let left = hit(&a, MatchSpan::none(), MatchSpan::new(0, 1));
        let right = hit(&b, MatchSpan::new(3, 1), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
        assert_eq!(compare_hits(&right, &left), Ordering::Less);
    }

    #[test]
    fn test_earlier_start_first() {
        let a = contact("Anna", "");
        let b = contact("Bob", "");
        let left = hit(&a, MatchSpan::new(1, 3), MatchSpan::none());
        let right = hit(&b, MatchSpan::new(0, 1), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
    }

    #[test]
    fn test_longer_match_first() {
        let a = contact("Anna", "");
        let b = contact("Bob", "");
        let left = hit(&a, MatchSpan::new(0, 1), MatchSpan::none());
        let right = hit(&b, MatchSpan::from_runs(vec![(0, 1), (2, 1)]), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
    }

    #[test]
    fn test_fewer_unmatched_first() {
        let a = contact("张三丰", "");
        let b = contact("张三", "");
        let left = hit(&a, MatchSpan::new(0, 1), MatchSpan::none());
        let right = hit(&b, MatchSpan::new(0, 1), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
    }

    #[test]
    fn test_name_tiebreak() {
        let a = contact("bob", "");
        let b = contact("Bea", "");
        let left = hit(&a, MatchSpan::new(0, 1), MatchSpan::none());
        let right = hit(&b, MatchSpan::new(0, 1), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
    }

    #[test]
    fn test_number_ordering() {
        let a = contact("A", "13912345678");
        let b = contact("B", "13800001111");
        let c = contact("C", "555");
        let left = hit(&a, MatchSpan::none(), MatchSpan::new(0, 1));
        let right = hit(&b, MatchSpan::none(), MatchSpan::new(0, 1));
        let later = hit(&c, MatchSpan::none(), MatchSpan::new(2, 1));
        assert_eq!(compare_hits(&left, &right), Ordering::Greater);
        assert_eq!(compare_hits(&right, &later), Ordering::Less);
    }

    #[test]
    fn test_nothing_found_is_equal() {
        let a = contact("A", "1");
        let b = contact("B", "2");
        let left = hit(&a, MatchSpan::none(), MatchSpan::none());
        let right = hit(&b, MatchSpan::none(), MatchSpan::none());
        assert_eq!(compare_hits(&left, &right), Ordering::Equal);
    }
}
