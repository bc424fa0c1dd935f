//! Completion candidates.
//!
//! A [`Candidate`] is a [`Word`] with the ranking features that only depend
//! on the candidate itself precomputed at interning time: its case-swapped
//! text, its word boundary characters, and whether it is all lowercase.

use std::ops::Deref;

use glean_intern::{Intern, Repository};
use glean_unicode::{Character, UnicodeDecodeError, Word};
use once_cell::sync::Lazy;

use crate::ranking::MatchResult;

/// Candidate texts longer than this intern as the empty sentinel. Such large
/// identifiers are almost never desirable completions.
const MAX_CANDIDATE_SIZE: usize = 80;

/// An interned completion candidate.
#[derive(Debug)]
pub struct Candidate {
    word: Word,
    case_swapped_text: String,
    word_boundary_chars: Vec<&'static Character>,
    text_is_lowercase: bool,
}

impl Candidate {
    /// The candidate text with the case of every character swapped. Compared
    /// lexicographically as the final ranking tie-breaker, which puts
    /// lowercase candidates before uppercase ones.
    pub fn case_swapped_text(&self) -> &str {
        &self.case_swapped_text
    }

    /// The characters starting a new "word" inside the identifier: the first
    /// character (unless punctuation), every uppercase character after a
    /// non-uppercase one, and every letter after punctuation.
    pub fn word_boundary_chars(&self) -> &[&'static Character] {
        &self.word_boundary_chars
    }

    pub fn text_is_lowercase(&self) -> bool {
        self.text_is_lowercase
    }

    /// Match `query` as a subsequence of this candidate.
    ///
    /// Both cursors advance over the candidate; the query cursor advances on
    /// every smart match. Returns `None` when the candidate ends before the
    /// query is exhausted. The empty query matches with an index sum of zero.
    pub fn query_match_result(&'static self, query: &Word) -> Option<MatchResult> {
        if query.is_empty() {
            return Some(MatchResult::new(self, query, 0, false));
        }

        if self.len() < query.len() {
            return None;
        }

        let query_characters = query.characters();
        let mut query_index = 0;
        let mut index_sum = 0;

        for (candidate_index, candidate_character) in self.characters().iter().enumerate() {
            if query_characters[query_index].matches_smart(candidate_character) {
                index_sum += candidate_index;

                if query_index == query_characters.len() - 1 {
                    // The query is a prefix when every match landed at
                    // successive candidate positions from the start.
                    return Some(MatchResult::new(
                        self,
                        query,
                        index_sum,
                        candidate_index == query_index,
                    ));
                }

                query_index += 1;
            }
        }

        None
    }

    fn compute_case_swapped_text(word: &Word) -> String {
        word.characters()
            .iter()
            .map(|character| character.swapped_case())
            .collect()
    }

    fn compute_word_boundary_chars(word: &Word) -> Vec<&'static Character> {
        let mut boundary_chars = Vec::new();
        let characters = word.characters();

        let Some((first, rest)) = characters.split_first() else {
            return boundary_chars;
        };
        if !first.is_punctuation() {
            boundary_chars.push(*first);
        }

        let mut previous = *first;
        for character in rest {
            if (!previous.is_uppercase() && character.is_uppercase())
                || (previous.is_punctuation() && character.is_letter())
            {
                boundary_chars.push(*character);
            }
            previous = *character;
        }

        boundary_chars
    }
}

impl Deref for Candidate {
    type Target = Word;

    fn deref(&self) -> &Self::Target {
        &self.word
    }
}

impl Intern for Candidate {
    type Error = UnicodeDecodeError;
    const MAX_TEXT_BYTES: Option<usize> = Some(MAX_CANDIDATE_SIZE);

    fn from_text(text: String) -> Result<Self, Self::Error> {
        let word = Word::new(text)?;
        let case_swapped_text = Self::compute_case_swapped_text(&word);
        let word_boundary_chars = Self::compute_word_boundary_chars(&word);
        let text_is_lowercase = !word.characters().iter().any(|c| c.is_uppercase());

        Ok(Candidate {
            word,
            case_swapped_text,
            word_boundary_chars,
            text_is_lowercase,
        })
    }
}

/// The process-wide candidate repository.
pub fn candidate_repository() -> &'static Repository<Candidate> {
    static REPOSITORY: Lazy<Repository<Candidate>> = Lazy::new(Repository::new);
    &REPOSITORY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str) -> &'static Candidate {
        candidate_repository().get_element(text.to_owned()).unwrap()
    }

    fn boundary_chars(text: &str) -> String {
        candidate(text)
            .word_boundary_chars()
            .iter()
            .map(|c| c.normal())
            .collect()
    }

    fn is_subsequence(query: &str, candidate_text: &str) -> bool {
        candidate(candidate_text)
            .query_match_result(&Word::new(query).unwrap())
            .is_some()
    }

    #[test]
    fn word_boundary_chars_simple_words() {
        assert_eq!(boundary_chars("simple"), "s");
        assert_eq!(boundary_chars("simple_foo"), "sf");
        assert_eq!(boundary_chars("Simple"), "S");
        assert_eq!(boundary_chars("SimpleStuff"), "SS");
        assert_eq!(boundary_chars("simpleStuffFoo"), "sSF");
        assert_eq!(boundary_chars("\u{03A3}imple\u{03A3}tuff"), "\u{03A3}\u{03A3}");
        assert_eq!(
            boundary_chars("\u{03C3}imple\u{03A3}tuff\u{03A6}oo"),
            "\u{03C3}\u{03A3}\u{03A6}"
        );
    }

    #[test]
    fn word_boundary_chars_leading_punctuation() {
        assert_eq!(boundary_chars("_simple"), "s");
        assert_eq!(boundary_chars(".simple"), "s");
        assert_eq!(boundary_chars("-simple"), "s");
        assert_eq!(boundary_chars("\u{00AB}simple"), "s");
        assert_eq!(boundary_chars("\u{2026}simple"), "s");
        assert_eq!(boundary_chars("___simple__foo"), "sf");
        assert_eq!(boundary_chars("./;:simple..foo"), "sf");
    }

    #[test]
    fn word_boundary_chars_digits_are_not_boundaries() {
        assert_eq!(boundary_chars("_1simple"), "");
        assert_eq!(boundary_chars("_1simPle"), "P");
        assert_eq!(boundary_chars("\u{2026}1simple"), "");
        assert_eq!(boundary_chars("\u{2026}1simPle"), "P");
    }

    #[test]
    fn word_boundary_chars_uppercase_runs() {
        assert_eq!(boundary_chars("simpleSTUFF"), "sS");
        assert_eq!(boundary_chars("simpleSTUFFfoo"), "sS");
        assert_eq!(boundary_chars("simpleSTUFF_Foo"), "sSF");
        assert_eq!(boundary_chars("simpleSTUFF_foo"), "sSf");
        assert_eq!(boundary_chars("SIMPLE"), "S");
        assert_eq!(boundary_chars("_SIMPLE_STUFF"), "SS");
        assert_eq!(boundary_chars("SIMPLE\u{2014}\u{03A3}TUFF"), "S\u{03A3}");
    }

    #[test]
    fn case_swapped_text_swaps_every_character() {
        assert_eq!(candidate("fooBar").case_swapped_text(), "FOObAR");
        assert_eq!(candidate("foo_bar").case_swapped_text(), "FOO_BAR");
        assert!(candidate("foo_bar").text_is_lowercase());
        assert!(!candidate("fooBar").text_is_lowercase());
    }

    #[test]
    fn oversize_candidates_intern_as_the_empty_sentinel() {
        let oversize = candidate(&"x".repeat(MAX_CANDIDATE_SIZE + 1));
        assert!(oversize.is_empty());
        assert!(std::ptr::eq(oversize, candidate("")));

        let at_limit = candidate(&"y".repeat(MAX_CANDIDATE_SIZE));
        assert_eq!(at_limit.len(), MAX_CANDIDATE_SIZE);
    }

    #[test]
    fn query_subsequence_matrix() {
        let text = "Fo\u{03B2}a\u{00C5}Ar";

        for query in [
            text,
            "F\u{03B2}\u{00C5}A",
            "F",
            "\u{00C5}A",
            "A",
            "\u{03B2}",
            "fo\u{03B2}a\u{00E5}ar",
            "fo\u{03B2}a\u{00E5}Ar",
            "fo\u{03B2}a\u{00C5}ar",
            "fo\u{03B2}aaar",
            "f\u{03B2}aa",
            "f\u{03B2}\u{00E5}r",
        ] {
            assert!(is_subsequence(query, text), "query {query:?}");
        }

        for query in [
            "go",
            "R",
            "O",
            "Oar",
            "F\u{03B2}AR",
            "Fo\u{03B2}a\u{00C5}\u{00E5}r",
            "Fo\u{03B2}a\u{00E5}\u{00E5}r",
            "Fo\u{03B2}a\u{00C5}\u{00C5}r",
            "Fo\u{03B2}aa\u{00C5}r",
            "FO\u{03B2}a\u{00C5}Ar",
        ] {
            assert!(!is_subsequence(query, text), "query {query:?}");
        }
    }

    #[test]
    fn candidates_shorter_than_the_query_never_match() {
        assert!(!is_subsequence("fooo", "foo"));
        assert!(is_subsequence("foo", "foo"));
    }

    #[test]
    fn empty_query_matches_with_zero_index_sum() {
        let result = candidate("foo")
            .query_match_result(&Word::new("").unwrap())
            .unwrap();
        assert_eq!(result.char_match_index_sum(), 0);
        assert!(!result.query_is_candidate_prefix());
    }
}
