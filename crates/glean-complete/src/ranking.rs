//! Match results and their ranking order.
//!
//! A [`MatchResult`] records one positive subsequence match together with the
//! features the comparator needs. The comparator is a chain of
//! short-circuiting comparisons; `Ord` here *is* the ranking, so callers sort
//! results directly.

use std::cmp::Ordering;

use glean_unicode::{Character, Word};

use crate::candidate::Candidate;

/// One candidate matched against one query.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult {
    candidate: &'static Candidate,
    query_len: usize,
    first_char_same_in_query_and_text: bool,
    query_is_candidate_prefix: bool,
    char_match_index_sum: usize,
    num_wb_matches: usize,
}

impl MatchResult {
    pub(crate) fn new(
        candidate: &'static Candidate,
        query: &Word,
        char_match_index_sum: usize,
        query_is_candidate_prefix: bool,
    ) -> Self {
        let mut first_char_same_in_query_and_text = false;
        let mut num_wb_matches = 0;

        if !query.is_empty() && !candidate.is_empty() {
            first_char_same_in_query_and_text =
                candidate.characters()[0].equals_base(query.characters()[0]);
            num_wb_matches = longest_common_subsequence_length(
                query.characters(),
                candidate.word_boundary_chars(),
            );
        }

        MatchResult {
            candidate,
            query_len: query.len(),
            first_char_same_in_query_and_text,
            query_is_candidate_prefix,
            char_match_index_sum,
            num_wb_matches,
        }
    }

    pub fn candidate(&self) -> &'static Candidate {
        self.candidate
    }

    pub fn text(&self) -> &str {
        self.candidate.text()
    }

    /// Whether the first characters of query and candidate share a base.
    pub fn first_char_same_in_query_and_text(&self) -> bool {
        self.first_char_same_in_query_and_text
    }

    /// Whether the query matched at successive candidate positions from the
    /// start, e.g. query "foo" against candidate "foobar".
    pub fn query_is_candidate_prefix(&self) -> bool {
        self.query_is_candidate_prefix
    }

    /// Sum of the candidate indexes where query characters hit. The query
    /// "abc" against "012a45bc8" sums 3 + 6 + 7 = 16.
    pub fn char_match_index_sum(&self) -> usize {
        self.char_match_index_sum
    }

    /// Number of query characters matching candidate word boundary
    /// characters, in order and ignoring case and accents.
    pub fn num_wb_matches(&self) -> usize {
        self.num_wb_matches
    }

    fn num_word_boundary_chars(&self) -> usize {
        self.candidate.word_boundary_chars().len()
    }
}

impl Ord for MatchResult {
    // Results from the same query, ranked best-first. A result beats another
    // when the first differing rule in the chain favors it:
    //  1. its first character matches the query's and the other's does not;
    //  2. if either side matched all its word boundary characters: more word
    //     boundary matches, then fewer word boundary characters;
    //  3. the query is a prefix of it but not of the other;
    //  4. more word boundary matches;
    //  5. fewer word boundary characters;
    //  6. a smaller sum of matched character indexes;
    //  7. fewer characters;
    //  8. all lowercase while the other is not;
    //  9. smaller case-swapped text, which puts "foo" before "Foo".
    fn cmp(&self, other: &Self) -> Ordering {
        if self.query_len != 0 {
            if self.first_char_same_in_query_and_text
                != other.first_char_same_in_query_and_text
            {
                return if self.first_char_same_in_query_and_text {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }

            if self.num_wb_matches == self.query_len || other.num_wb_matches == other.query_len {
                if self.num_wb_matches != other.num_wb_matches {
                    return other.num_wb_matches.cmp(&self.num_wb_matches);
                }

                if self.num_word_boundary_chars() != other.num_word_boundary_chars() {
                    return self
                        .num_word_boundary_chars()
                        .cmp(&other.num_word_boundary_chars());
                }
            }

            if self.query_is_candidate_prefix != other.query_is_candidate_prefix {
                return if self.query_is_candidate_prefix {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }

            if self.num_wb_matches != other.num_wb_matches {
                return other.num_wb_matches.cmp(&self.num_wb_matches);
            }

            if self.num_word_boundary_chars() != other.num_word_boundary_chars() {
                return self
                    .num_word_boundary_chars()
                    .cmp(&other.num_word_boundary_chars());
            }

            if self.char_match_index_sum != other.char_match_index_sum {
                return self.char_match_index_sum.cmp(&other.char_match_index_sum);
            }

            if self.candidate.len() != other.candidate.len() {
                return self.candidate.len().cmp(&other.candidate.len());
            }

            if self.candidate.text_is_lowercase() != other.candidate.text_is_lowercase() {
                return if self.candidate.text_is_lowercase() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }

        self.candidate
            .case_swapped_text()
            .cmp(other.candidate.case_swapped_text())
    }
}

impl PartialOrd for MatchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MatchResult {}

/// Length of the longest common subsequence of two character sequences,
/// matching on base characters. Rolling two-row dynamic programming with the
/// rows sized to the shorter sequence.
fn longest_common_subsequence_length(
    first: &[&'static Character],
    second: &[&'static Character],
) -> usize {
    let (longer, shorter) = if first.len() > second.len() {
        (first, second)
    } else {
        (second, first)
    };

    let mut previous = vec![0usize; shorter.len() + 1];
    let mut current = vec![0usize; shorter.len() + 1];

    for longer_character in longer {
        for (j, shorter_character) in shorter.iter().enumerate() {
            current[j + 1] = if longer_character.equals_base(shorter_character) {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        previous.copy_from_slice(&current);
    }

    current[shorter.len()]
}

/// Shrink `elements` to its `max_elements` smallest elements, in sorted
/// order. Sorts the whole vector when `max_elements` is zero or not smaller
/// than the length.
pub(crate) fn partial_sort<T: Ord>(elements: &mut Vec<T>, max_elements: usize) {
    if max_elements > 0 && max_elements < elements.len() {
        elements.select_nth_unstable(max_elements);
        elements.truncate(max_elements);
    }
    elements.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidate_repository;

    fn result(candidate_text: &str, query: &str) -> MatchResult {
        let candidate = candidate_repository()
            .get_element(candidate_text.to_owned())
            .unwrap();
        candidate
            .query_match_result(&Word::new(query).unwrap())
            .unwrap_or_else(|| panic!("{query:?} should match {candidate_text:?}"))
    }

    fn lcs(first: &str, second: &str) -> usize {
        let first = Word::new(first).unwrap();
        let second = Word::new(second).unwrap();
        longest_common_subsequence_length(first.characters(), second.characters())
    }

    #[test]
    fn lcs_matches_on_base_characters() {
        assert_eq!(lcs("abc", "abc"), 3);
        assert_eq!(lcs("abc", "axbxc"), 3);
        assert_eq!(lcs("acb", "abc"), 2);
        assert_eq!(lcs("abc", ""), 0);
        assert_eq!(lcs("fbr", "FBR"), 3);
        assert_eq!(lcs("e\u{0301}", "E"), 1);
    }

    #[test]
    fn first_char_comparison_ignores_case() {
        let result_foobar = result("Foobar", "foo");
        assert!(result_foobar.first_char_same_in_query_and_text());

        let result_afoobar = result("afoobar", "foo");
        assert!(!result_afoobar.first_char_same_in_query_and_text());
    }

    #[test]
    fn prefix_and_index_sum_are_derived_from_the_match() {
        let result_foobar = result("foobar", "foo");
        assert!(result_foobar.query_is_candidate_prefix());
        assert_eq!(result_foobar.char_match_index_sum(), 3);

        let result_xfoobar = result("xfoobar", "foo");
        assert!(!result_xfoobar.query_is_candidate_prefix());
        assert_eq!(result_xfoobar.char_match_index_sum(), 6);
    }

    #[test]
    fn empty_query_orders_by_case_swapped_text() {
        let foo = result("foo", "");
        let bar = result("bar", "");
        let upper_foo = result("Foo", "");

        assert!(bar < foo);
        assert!(foo < upper_foo);
    }

    #[test]
    fn partial_sort_keeps_the_smallest_prefix() {
        let mut values: Vec<i32> = (0..100).rev().collect();
        partial_sort(&mut values, 5);
        assert_eq!(values, [0, 1, 2, 3, 4]);

        let mut values = vec![3, 1, 2];
        partial_sort(&mut values, 0);
        assert_eq!(values, [1, 2, 3]);

        let mut values = vec![3, 1, 2];
        partial_sort(&mut values, 10);
        assert_eq!(values, [1, 2, 3]);
    }

    mod ordering_laws {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_identifier() -> impl Strategy<Value = String> {
            proptest::collection::vec(
                prop_oneof![
                    prop::char::range('a', 'f'),
                    prop::char::range('A', 'F'),
                    Just('_'),
                ],
                1..8,
            )
            .prop_map(|chars| chars.into_iter().collect())
        }

        proptest! {
            #[test]
            fn ordering_is_a_strict_weak_order(
                candidates in proptest::collection::vec(arbitrary_identifier(), 3..12),
                query in proptest::collection::vec(prop::char::range('a', 'f'), 0..3),
            ) {
                let query: String = query.into_iter().collect();
                let query_word = Word::new(query.as_str()).unwrap();

                let mut results = Vec::new();
                for text in candidates {
                    let candidate =
                        candidate_repository().get_element(text).unwrap();
                    if let Some(result) = candidate.query_match_result(&query_word) {
                        results.push(result);
                    }
                }

                for a in &results {
                    prop_assert_eq!(a.cmp(a), Ordering::Equal);
                    for b in &results {
                        prop_assert_eq!(a.cmp(b), b.cmp(a).reverse());
                        for c in &results {
                            if a.cmp(b) == Ordering::Less && b.cmp(c) == Ordering::Less {
                                prop_assert_eq!(a.cmp(c), Ordering::Less);
                            }
                        }
                    }
                }
            }
        }
    }
}
