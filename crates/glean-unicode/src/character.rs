//! Grapheme cluster model.
//!
//! A [`Character`] is built from the text of one grapheme cluster. The code
//! points are put into canonical order and their per-scalar forms are
//! concatenated, which yields the NFD normalization of the cluster plus its
//! folded-case, swapped-case, and base forms.

use glean_intern::{Intern, Repository};
use once_cell::sync::Lazy;

use crate::code_point::{
    break_into_code_points, BreakProperty, CodePoint, UnicodeDecodeError,
};

/// Sort combining marks according to the Canonical Ordering Algorithm:
/// every maximal run of code points with a non-zero combining class is
/// stable-sorted by that class.
fn canonical_sort(code_points: &mut [&'static CodePoint]) {
    let mut start = 0;
    while start < code_points.len() {
        if code_points[start].combining_class() == 0 {
            start += 1;
            continue;
        }

        let mut end = start;
        while end < code_points.len() && code_points[end].combining_class() != 0 {
            end += 1;
        }

        code_points[start..end].sort_by_key(|code_point| code_point.combining_class());
        start = end;
    }
}

/// One user-perceived character.
///
/// Equality is by normalized text, so all equivalent encodings of a cluster
/// compare equal. The `base` form drops combining and prepended code points
/// and folds case; it drives accent-insensitive matching.
#[derive(Debug)]
pub struct Character {
    normal: String,
    base: String,
    folded_case: String,
    swapped_case: String,
    is_base: bool,
    is_letter: bool,
    is_punctuation: bool,
    is_uppercase: bool,
}

impl Character {
    pub fn normal(&self) -> &str {
        &self.normal
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn folded_case(&self) -> &str {
        &self.folded_case
    }

    pub fn swapped_case(&self) -> &str {
        &self.swapped_case
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_letter(&self) -> bool {
        self.is_letter
    }

    pub fn is_punctuation(&self) -> bool {
        self.is_punctuation
    }

    pub fn is_uppercase(&self) -> bool {
        self.is_uppercase
    }

    pub fn equals_base(&self, other: &Character) -> bool {
        self.base == other.base
    }

    pub fn equals_ignore_case(&self, other: &Character) -> bool {
        self.folded_case == other.folded_case
    }

    /// Smart base matching on top of smart case matching, e.g.:
    ///  - e matches e, é, E, É;
    ///  - E matches E, É but not e, é;
    ///  - é matches é, É but not e, E;
    ///  - É matches É but not e, é, E.
    pub fn matches_smart(&self, other: &Character) -> bool {
        (self.is_base && self.equals_base(other) && (!self.is_uppercase || other.is_uppercase))
            || (!self.is_uppercase && self.equals_ignore_case(other))
            || self.normal == other.normal
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal
    }
}

impl Eq for Character {}

impl Intern for Character {
    type Error = UnicodeDecodeError;

    fn from_text(text: String) -> Result<Self, Self::Error> {
        let mut code_points = break_into_code_points(&text)?;
        canonical_sort(&mut code_points);

        let mut character = Character {
            normal: String::new(),
            base: String::new(),
            folded_case: String::new(),
            swapped_case: String::new(),
            is_base: true,
            is_letter: false,
            is_punctuation: false,
            is_uppercase: false,
        };

        for code_point in code_points {
            character.normal.push_str(code_point.normal());
            character.folded_case.push_str(code_point.folded_case());
            character.swapped_case.push_str(code_point.swapped_case());
            character.is_letter |= code_point.is_letter();
            character.is_punctuation |= code_point.is_punctuation();
            character.is_uppercase |= code_point.is_uppercase();

            match code_point.break_property() {
                BreakProperty::Prepend | BreakProperty::Extend | BreakProperty::SpacingMark => {
                    character.is_base = false;
                }
                _ => character.base.push_str(code_point.folded_case()),
            }
        }

        Ok(character)
    }
}

/// The process-wide character repository.
pub fn character_repository() -> &'static Repository<Character> {
    static REPOSITORY: Lazy<Repository<Character>> = Lazy::new(Repository::new);
    &REPOSITORY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(text: &str) -> &'static Character {
        character_repository().get_element(text.to_owned()).unwrap()
    }

    #[test]
    fn equality_is_by_normalized_text() {
        // Precomposed and decomposed spellings of the same cluster.
        assert_eq!(character("\u{00C9}"), character("E\u{0301}"));
        assert_eq!(character("\u{00E5}"), character("a\u{030A}"));
        // The angstrom sign decomposes to capital A with ring above.
        assert_eq!(character("\u{212B}"), character("A\u{030A}"));
        assert_eq!(character("\u{212B}"), character("\u{00C5}"));
        // The ohm sign decomposes to capital omega.
        assert_eq!(character("\u{2126}"), character("\u{03A9}"));

        assert_ne!(character("\u{00E9}"), character("\u{00C9}"));
    }

    #[test]
    fn combining_marks_are_canonically_reordered() {
        // Dot below (class 220) sorts before dot above (class 230) regardless
        // of input order; both spellings match the precomposed cluster.
        assert_eq!(character("s\u{0307}\u{0323}"), character("s\u{0323}\u{0307}"));
        assert_eq!(character("\u{1E69}"), character("s\u{0307}\u{0323}"));
        assert_eq!(character("s\u{0323}\u{0307}").normal(), "s\u{0323}\u{0307}");
    }

    #[test]
    fn case_insensitive_equality_uses_folded_forms() {
        assert!(character("\u{00E9}").equals_ignore_case(character("\u{00C9}")));
        assert!(character("\u{00E9}").equals_ignore_case(character("E\u{0301}")));
        // Final sigma, small sigma, and capital sigma all fold together.
        assert!(character("\u{03C2}").equals_ignore_case(character("\u{03C3}")));
        assert!(character("\u{03C2}").equals_ignore_case(character("\u{03A3}")));
        // Dotless i is distinct from i even when case is ignored.
        assert!(!character("\u{0131}").equals_ignore_case(character("I")));
    }

    #[test]
    fn aggregate_flags_cover_the_whole_cluster() {
        let s_with_dots = character("S\u{0323}\u{0307}");
        assert!(s_with_dots.is_letter());
        assert!(s_with_dots.is_uppercase());
        assert!(!s_with_dots.is_base());
        assert_eq!(s_with_dots.base(), "s");
        assert_eq!(s_with_dots.swapped_case(), "s\u{0323}\u{0307}");

        assert!(character("\u{00AB}").is_punctuation());
        assert!(character("_").is_punctuation());
    }

    #[test]
    fn smart_matching_is_asymmetric() {
        let e = character("e");
        let e_acute = character("e\u{0301}");
        let cap_e = character("E");
        let cap_e_acute = character("E\u{0301}");

        // Lowercase base matches everything with the same base letter.
        assert!(e.matches_smart(e));
        assert!(e.matches_smart(e_acute));
        assert!(e.matches_smart(cap_e));
        assert!(e.matches_smart(cap_e_acute));

        // Uppercase base only matches uppercase.
        assert!(cap_e.matches_smart(cap_e));
        assert!(cap_e.matches_smart(cap_e_acute));
        assert!(!cap_e.matches_smart(e));
        assert!(!cap_e.matches_smart(e_acute));

        // Accented lowercase matches both cases of the accented letter.
        assert!(e_acute.matches_smart(e_acute));
        assert!(e_acute.matches_smart(cap_e_acute));
        assert!(!e_acute.matches_smart(e));
        assert!(!e_acute.matches_smart(cap_e));

        // Accented uppercase matches only itself.
        assert!(cap_e_acute.matches_smart(cap_e_acute));
        assert!(!cap_e_acute.matches_smart(e));
        assert!(!cap_e_acute.matches_smart(cap_e));
        assert!(!cap_e_acute.matches_smart(e_acute));
    }

    #[test]
    fn normalization_is_idempotent() {
        for text in ["\u{00E9}", "\u{212B}", "s\u{0307}\u{0323}", "x"] {
            let once = character(text);
            let twice = character(once.normal());
            assert_eq!(once.normal(), twice.normal());
        }
    }
}
