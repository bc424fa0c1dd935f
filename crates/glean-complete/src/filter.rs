//! One-shot filtering and ranking of an external candidate list.
//!
//! External analyzers produce completion items the database has never seen;
//! this entry point ranks such a list against a query in a single call,
//! reusing the candidate repository so repeated filtering of the same items
//! stays cheap.

use std::cmp::Ordering;

use crate::candidate::candidate_repository;
use crate::ranking::{partial_sort, MatchResult};
use glean_unicode::{UnicodeDecodeError, Word};

struct RankedItem {
    result: MatchResult,
    index: usize,
}

impl Ord for RankedItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // The index tie-break keeps the output deterministic for items with
        // identical texts.
        self.result
            .cmp(&other.result)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for RankedItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedItem {}

/// Filter `candidates` down to the items whose extracted text matches
/// `query`, ranked best first and truncated to `max_candidates` (0 means no
/// limit). The items themselves are opaque; `text_of` yields the text to
/// match.
pub fn filter_and_sort_candidates<T>(
    candidates: Vec<T>,
    query: &str,
    max_candidates: usize,
    text_of: impl Fn(&T) -> &str,
) -> Result<Vec<T>, UnicodeDecodeError> {
    let texts: Vec<String> = candidates
        .iter()
        .map(|candidate| text_of(candidate).to_owned())
        .collect();
    let interned = candidate_repository().get_elements(texts)?;

    let query = Word::new(query)?;
    let mut ranked = Vec::new();

    for (index, candidate) in interned.into_iter().enumerate() {
        if candidate.is_empty() || !candidate.contains_bytes(&query) {
            continue;
        }

        if let Some(result) = candidate.query_match_result(&query) {
            ranked.push(RankedItem { result, index });
        }
    }

    partial_sort(&mut ranked, max_candidates);

    let mut slots: Vec<Option<T>> = candidates.into_iter().map(Some).collect();
    Ok(ranked
        .into_iter()
        .filter_map(|item| slots[item.index].take())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        insertion_text: &'static str,
        detail: &'static str,
    }

    fn item(insertion_text: &'static str) -> Item {
        Item {
            insertion_text,
            detail: "",
        }
    }

    #[test]
    fn items_are_ranked_by_their_extracted_text() {
        let items = vec![item("foobar"), item("afoobar"), item("gggg")];
        let ranked =
            filter_and_sort_candidates(items, "fbr", 0, |item| item.insertion_text).unwrap();

        assert_eq!(
            ranked,
            vec![item("foobar"), item("afoobar")]
        );
        assert!(ranked.iter().all(|item| item.detail.is_empty()));
    }

    #[test]
    fn plain_strings_work_as_items() {
        let ranked = filter_and_sort_candidates(
            vec!["STDIN_FILENO".to_owned(), "stdin".to_owned()],
            "std",
            0,
            |text| text.as_str(),
        )
        .unwrap();

        assert_eq!(ranked, ["stdin", "STDIN_FILENO"]);
    }

    #[test]
    fn empty_query_keeps_every_item_in_swapped_case_order() {
        let ranked = filter_and_sort_candidates(
            vec!["foo".to_owned(), "bar".to_owned()],
            "",
            0,
            |text| text.as_str(),
        )
        .unwrap();

        assert_eq!(ranked, ["bar", "foo"]);
    }

    #[test]
    fn max_candidates_truncates_the_ranking() {
        let items: Vec<String> = (0..10).map(|i| format!("foo{i}")).collect();
        let ranked =
            filter_and_sort_candidates(items, "foo", 3, |text| text.as_str()).unwrap();

        assert_eq!(ranked, ["foo0", "foo1", "foo2"]);
    }

    #[test]
    fn duplicate_texts_keep_their_input_order() {
        let items = vec![item("dup"), item("dup"), item("other")];
        let ranked =
            filter_and_sort_candidates(items, "dup", 0, |item| item.insertion_text).unwrap();

        assert_eq!(ranked, vec![item("dup"), item("dup")]);
    }
}
