//! Embedded Unicode table.
//!
//! The table holds one row per scalar whose properties differ from the
//! defaults (identity normalization, no flags, `Other` break class). It is
//! generated offline by `cargo run -p xtask -- gen-unicode-table` from the
//! Unicode Character Database, restricted to a configured set of script
//! blocks; scalars outside those blocks simply take the default row, which
//! keeps every lookup total.

use crate::code_point::{BreakProperty, IndicConjunctBreak};

mod generated;

const FLAG_LETTER: u8 = 1;
const FLAG_PUNCTUATION: u8 = 2;
const FLAG_UPPERCASE: u8 = 4;

/// One scalar's worth of table data, borrowed from the embedded table.
pub(crate) struct RawCodePoint {
    pub(crate) normal: &'static str,
    pub(crate) folded_case: &'static str,
    pub(crate) swapped_case: &'static str,
    pub(crate) is_letter: bool,
    pub(crate) is_punctuation: bool,
    pub(crate) is_uppercase: bool,
    pub(crate) break_property: BreakProperty,
    pub(crate) combining_class: u8,
    pub(crate) indic_conjunct_break: IndicConjunctBreak,
}

/// Look up the UTF-8 text of a single scalar. `None` means the scalar takes
/// the default properties.
pub(crate) fn find_code_point(text: &str) -> Option<RawCodePoint> {
    let rows = generated::CODE_POINTS;
    let index = rows.binary_search_by_key(&text, |row| row.0).ok()?;

    let (_, normal, folded_case, swapped_case, flags, break_property, combining_class, indic) =
        rows[index];
    Some(RawCodePoint {
        normal,
        folded_case,
        swapped_case,
        is_letter: flags & FLAG_LETTER != 0,
        is_punctuation: flags & FLAG_PUNCTUATION != 0,
        is_uppercase: flags & FLAG_UPPERCASE != 0,
        break_property: BreakProperty::from_raw(break_property),
        combining_class,
        indic_conjunct_break: IndicConjunctBreak::from_raw(indic),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for window in generated::CODE_POINTS.windows(2) {
            assert!(window[0].0 < window[1].0, "rows out of order: {:?}", window);
        }
    }

    #[test]
    fn ascii_letter_lookup() {
        let a = find_code_point("A").unwrap();
        assert_eq!(a.folded_case, "a");
        assert_eq!(a.swapped_case, "a");
        assert!(a.is_letter);
        assert!(a.is_uppercase);
        assert!(!a.is_punctuation);
    }

    #[test]
    fn digits_take_the_default_row() {
        assert!(find_code_point("7").is_none());
    }

    #[test]
    fn precomposed_scalars_decompose() {
        let e_acute = find_code_point("\u{00E9}").unwrap();
        assert_eq!(e_acute.normal, "e\u{0301}");
        assert_eq!(e_acute.folded_case, "e\u{0301}");
        assert_eq!(e_acute.swapped_case, "E\u{0301}");
    }
}
