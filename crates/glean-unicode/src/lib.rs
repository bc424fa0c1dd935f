//! Unicode word model for identifier matching.
//!
//! The model has three layers, each interned in its own repository:
//!
//! - [`CodePoint`]: one Unicode scalar with its normalization, case forms,
//!   and segmentation properties, looked up in an embedded table.
//! - [`Character`]: one grapheme cluster, NFD-normalized, with aggregate
//!   flags and base/folded/swapped forms.
//! - [`Word`]: a UTF-8 string segmented into characters following UAX #29
//!   grapheme cluster boundary rules (plus the Indic conjunct break
//!   extension), caching a byte-presence bitset for cheap prefiltering.

mod character;
mod code_point;
mod segmentation;
mod table;
mod word;

pub use character::{character_repository, Character};
pub use code_point::{
    break_into_code_points, code_point_repository, BreakProperty, CodePoint, IndicConjunctBreak,
    UnicodeDecodeError,
};
pub use word::Word;
