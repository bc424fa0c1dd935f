//! Word model: a string segmented into characters, plus a byte-presence
//! bitset used to cheaply rule out non-matching candidates.

use crate::character::{character_repository, Character};
use crate::code_point::{break_into_code_points, UnicodeDecodeError};
use crate::segmentation::break_into_characters;

/// Set of byte values occurring in a word's base characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ByteBitset([u64; 4]);

impl ByteBitset {
    fn insert(&mut self, byte: u8) {
        self.0[usize::from(byte >> 6)] |= 1u64 << (byte & 0x3f);
    }

    fn contains_all(&self, other: &ByteBitset) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(mine, theirs)| mine & theirs == *theirs)
    }
}

/// A sequence of characters produced by grapheme cluster segmentation.
///
/// The original text is kept verbatim; the characters hold its normalized
/// form. Both queries and candidates are words.
#[derive(Debug)]
pub struct Word {
    text: String,
    characters: Vec<&'static Character>,
    bytes_present: ByteBitset,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Result<Self, UnicodeDecodeError> {
        let text = text.into();
        let code_points = break_into_code_points(&text)?;
        let characters = character_repository().get_elements(break_into_characters(&code_points))?;

        let mut bytes_present = ByteBitset::default();
        for character in &characters {
            for byte in character.base().bytes() {
                bytes_present.insert(byte);
            }
        }

        Ok(Word {
            text,
            characters,
            bytes_present,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn characters(&self) -> &[&'static Character] {
        &self.characters
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Whether every byte present in `other` is also present in this word.
    ///
    /// This is a lower bound for subsequence matching: a candidate that fails
    /// this test cannot match the query.
    pub fn contains_bytes(&self, other: &Word) -> bool {
        self.bytes_present.contains_all(&other.bytes_present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn characters_concatenate_to_the_normalized_text() {
        let word = word("fooBar");
        assert_eq!(word.len(), 6);
        assert_eq!(word.text(), "fooBar");

        let rebuilt: String = word.characters().iter().map(|c| c.normal()).collect();
        assert_eq!(rebuilt, "fooBar");
    }

    #[test]
    fn precomposed_text_is_kept_but_characters_are_normalized() {
        let word = word("caf\u{00E9}");
        assert_eq!(word.text(), "caf\u{00E9}");
        assert_eq!(word.len(), 4);
        assert_eq!(word.characters()[3].normal(), "e\u{0301}");
    }

    #[test]
    fn empty_word_has_no_characters() {
        assert!(word("").is_empty());
        assert_eq!(word("").len(), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn ascii_identifier() -> impl Strategy<Value = String> {
            proptest::string::string_regex("[A-Za-z0-9_]{0,24}").unwrap()
        }

        proptest! {
            // ASCII text is already in NFD, so segmentation must round-trip
            // exactly, one character per byte.
            #[test]
            fn ascii_segmentation_round_trips(text in ascii_identifier()) {
                let word = Word::new(text.as_str()).unwrap();
                prop_assert_eq!(word.len(), text.len());

                let rebuilt: String = word.characters().iter().map(|c| c.normal()).collect();
                prop_assert_eq!(rebuilt, text);
            }

            #[test]
            fn contains_bytes_is_reflexive_and_monotone(text in ascii_identifier()) {
                let word = Word::new(text.as_str()).unwrap();
                prop_assert!(word.contains_bytes(&word));
                prop_assert!(word.contains_bytes(&Word::new("").unwrap()));
            }
        }
    }

    #[test]
    fn contains_bytes_ignores_case_and_accents() {
        let candidate = word("f\u{00EA}\u{00E7}\u{00E0}o\u{03B2}a\u{FF21}aR");

        for query in [
            "f\u{00EA}\u{00E7}\u{00E0}o\u{03B2}a\u{FF21}ar",
            "F\u{00EA}\u{00E7}\u{00E0}o\u{03B2}a\u{FF41}aR",
            "fo\u{0392}ar",
            "R\u{FF21}\u{03B2}of",
            "\u{03B2}fr\u{00EA}\u{00E7}\u{00E0}\u{FF41}",
            "f\u{03B2}r",
            "r",
            "\u{03B2}\u{03B2}\u{03B2}",
            "",
        ] {
            assert!(candidate.contains_bytes(&word(query)), "query {query:?}");
        }
    }

    #[test]
    fn contains_bytes_rejects_missing_bytes() {
        let candidate = word("Fo\u{00EA}\u{00E7}\u{03B2}\u{FF21}r");

        for query in [
            "Fo\u{00EA}\u{00E7}\u{03B2}\u{FF21}r\u{03B5}",
            "gggg",
            "\u{03C7}",
            "nfoo\u{0392}\u{FF41}r",
            "F\u{03B2}rmmm",
        ] {
            assert!(!candidate.contains_bytes(&word(query)), "query {query:?}");
        }
    }
}
