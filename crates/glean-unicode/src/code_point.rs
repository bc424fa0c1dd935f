//! Unicode scalar model.
//!
//! A [`CodePoint`] carries everything the matcher needs to know about one
//! scalar: its NFD normalization, folded and swapped case forms, letter /
//! punctuation / uppercase flags, its grapheme cluster break class, canonical
//! combining class, and Indic conjunct break class. Scalars not present in
//! the embedded table default to identity forms with no flags.

use glean_intern::{Intern, Repository};
use once_cell::sync::Lazy;

use crate::table;

/// Failure to decode a UTF-8 code point out of raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnicodeDecodeError {
    #[error("invalid leading byte in code point")]
    InvalidLeadingByte,

    #[error("invalid code point length")]
    InvalidCodePointLength,
}

/// Grapheme cluster break property, per UAX #29.
///
/// The numeric values match the rows emitted by the table generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakProperty {
    Other,
    Cr,
    Lf,
    Control,
    Extend,
    Zwj,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
    ExtendedPictographic,
}

impl BreakProperty {
    pub(crate) fn from_raw(raw: u8) -> Self {
        match raw {
            1 => BreakProperty::Cr,
            2 => BreakProperty::Lf,
            3 => BreakProperty::Control,
            4 => BreakProperty::Extend,
            5 => BreakProperty::Zwj,
            6 => BreakProperty::RegionalIndicator,
            7 => BreakProperty::Prepend,
            8 => BreakProperty::SpacingMark,
            9 => BreakProperty::L,
            10 => BreakProperty::V,
            11 => BreakProperty::T,
            12 => BreakProperty::Lv,
            13 => BreakProperty::Lvt,
            18 => BreakProperty::ExtendedPictographic,
            _ => BreakProperty::Other,
        }
    }
}

/// Indic conjunct break property, per UAX #44 `InCB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicConjunctBreak {
    None,
    Consonant,
    Extend,
    Linker,
}

impl IndicConjunctBreak {
    pub(crate) fn from_raw(raw: u8) -> Self {
        match raw {
            1 => IndicConjunctBreak::Consonant,
            2 => IndicConjunctBreak::Extend,
            3 => IndicConjunctBreak::Linker,
            _ => IndicConjunctBreak::None,
        }
    }
}

/// One Unicode scalar and its matching-relevant properties.
#[derive(Debug)]
pub struct CodePoint {
    normal: String,
    folded_case: String,
    swapped_case: String,
    is_letter: bool,
    is_punctuation: bool,
    is_uppercase: bool,
    break_property: BreakProperty,
    combining_class: u8,
    indic_conjunct_break: IndicConjunctBreak,
}

impl CodePoint {
    /// NFD normalization of this scalar. Two scalar sequences represent the
    /// same character iff their concatenated normal forms are identical.
    pub fn normal(&self) -> &str {
        &self.normal
    }

    /// Case-folded form; identical to [`normal`](Self::normal) for caseless
    /// scalars.
    pub fn folded_case(&self) -> &str {
        &self.folded_case
    }

    /// Lowercase form for uppercase scalars, uppercase form for lowercase
    /// ones, [`normal`](Self::normal) otherwise.
    pub fn swapped_case(&self) -> &str {
        &self.swapped_case
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

    pub fn break_property(&self) -> BreakProperty {
        self.break_property
    }

    /// Canonical combining class, used by the canonical ordering sort.
    pub fn combining_class(&self) -> u8 {
        self.combining_class
    }

    pub fn indic_conjunct_break(&self) -> IndicConjunctBreak {
        self.indic_conjunct_break
    }
}

impl Intern for CodePoint {
    type Error = UnicodeDecodeError;

    fn from_text(text: String) -> Result<Self, Self::Error> {
        match table::find_code_point(&text) {
            Some(raw) => Ok(CodePoint {
                normal: raw.normal.to_owned(),
                folded_case: raw.folded_case.to_owned(),
                swapped_case: raw.swapped_case.to_owned(),
                is_letter: raw.is_letter,
                is_punctuation: raw.is_punctuation,
                is_uppercase: raw.is_uppercase,
                break_property: raw.break_property,
                combining_class: raw.combining_class,
                indic_conjunct_break: raw.indic_conjunct_break,
            }),
            None => Ok(CodePoint {
                normal: text.clone(),
                folded_case: text.clone(),
                swapped_case: text,
                is_letter: false,
                is_punctuation: false,
                is_uppercase: false,
                break_property: BreakProperty::Other,
                combining_class: 0,
                indic_conjunct_break: IndicConjunctBreak::None,
            }),
        }
    }
}

/// The process-wide code point repository.
pub fn code_point_repository() -> &'static Repository<CodePoint> {
    static REPOSITORY: Lazy<Repository<CodePoint>> = Lazy::new(Repository::new);
    &REPOSITORY
}

/// Number of bytes in the scalar introduced by `leading_byte`.
fn code_point_length(leading_byte: u8) -> Result<usize, UnicodeDecodeError> {
    // 0xxxxxxx
    if leading_byte & 0x80 == 0x00 {
        return Ok(1);
    }
    // 110xxxxx
    if leading_byte & 0xe0 == 0xc0 {
        return Ok(2);
    }
    // 1110xxxx
    if leading_byte & 0xf0 == 0xe0 {
        return Ok(3);
    }
    // 11110xxx
    if leading_byte & 0xf8 == 0xf0 {
        return Ok(4);
    }
    Err(UnicodeDecodeError::InvalidLeadingByte)
}

/// Split a UTF-8 string into interned code points.
///
/// Only the leading byte of each scalar is inspected; continuation bytes are
/// not validated beyond being present.
pub fn break_into_code_points(text: &str) -> Result<Vec<&'static CodePoint>, UnicodeDecodeError> {
    let mut scalars = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();

    while start < bytes.len() {
        let length = code_point_length(bytes[start])?;
        let scalar = text
            .get(start..start + length)
            .ok_or(UnicodeDecodeError::InvalidCodePointLength)?;
        scalars.push(scalar.to_owned());
        start += length;
    }

    code_point_repository().get_elements(scalars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_lengths_follow_the_leading_byte() {
        assert_eq!(code_point_length(b'a'), Ok(1));
        assert_eq!(code_point_length(0xc3), Ok(2));
        assert_eq!(code_point_length(0xe4), Ok(3));
        assert_eq!(code_point_length(0xf0), Ok(4));
        // Continuation bytes cannot lead a code point.
        assert_eq!(
            code_point_length(0xaf),
            Err(UnicodeDecodeError::InvalidLeadingByte)
        );
        assert_eq!(
            code_point_length(0xff),
            Err(UnicodeDecodeError::InvalidLeadingByte)
        );
    }

    #[test]
    fn splitting_interns_one_code_point_per_scalar() {
        let code_points = break_into_code_points("a\u{00E9}b").unwrap();
        assert_eq!(code_points.len(), 3);
        assert_eq!(code_points[0].normal(), "a");
        assert_eq!(code_points[1].normal(), "e\u{0301}");
        assert_eq!(code_points[2].normal(), "b");

        let again = break_into_code_points("a").unwrap();
        assert!(std::ptr::eq(code_points[0], again[0]));
    }

    #[test]
    fn table_misses_default_to_identity() {
        // GOTHIC LETTER HWAIR is outside the generated blocks.
        let code_points = break_into_code_points("\u{10348}").unwrap();
        let hwair = code_points[0];
        assert_eq!(hwair.normal(), "\u{10348}");
        assert_eq!(hwair.folded_case(), "\u{10348}");
        assert!(!hwair.is_letter());
        assert_eq!(hwair.break_property(), BreakProperty::Other);
        assert_eq!(hwair.combining_class(), 0);
    }

    #[test]
    fn combining_marks_carry_their_class() {
        let code_points = break_into_code_points("\u{0323}\u{0307}").unwrap();
        assert_eq!(code_points[0].combining_class(), 220);
        assert_eq!(code_points[1].combining_class(), 230);
        assert_eq!(code_points[0].break_property(), BreakProperty::Extend);
    }
}
