//! UCD parsing and row assembly for `gen-unicode-table`.
//!
//! A row is emitted for every scalar in [`BLOCKS`] whose properties differ
//! from the defaults (identity forms, no flags, `Other` break class, zero
//! combining class, no Indic conjunct class). The lookup side of the table
//! treats absent scalars as defaulted, so leaving a block out of this list
//! degrades coverage, never correctness.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Code point blocks the generated table covers.
pub(crate) const BLOCKS: &[(u32, u32)] = &[
    (0x0000, 0x024F),   // C0/C1 controls, ASCII, Latin-1, Latin Extended-A/B
    (0x0250, 0x02AF),   // IPA extensions
    (0x02B0, 0x02FF),   // Spacing modifier letters
    (0x0300, 0x036F),   // Combining diacritical marks
    (0x0370, 0x03FF),   // Greek and Coptic
    (0x0400, 0x04FF),   // Cyrillic
    (0x0600, 0x06FF),   // Arabic
    (0x0900, 0x097F),   // Devanagari
    (0x1100, 0x11FF),   // Hangul jamo
    (0x1E00, 0x1EFF),   // Latin Extended Additional
    (0x2000, 0x206F),   // General punctuation
    (0x20D0, 0x20F0),   // Combining marks for symbols
    (0x2100, 0x214F),   // Letterlike symbols
    (0x2600, 0x27BF),   // Misc symbols, dingbats
    (0xFE00, 0xFE0F),   // Variation selectors
    (0xFEFF, 0xFEFF),   // BOM / ZWNBSP
    (0xFF00, 0xFFEF),   // Halfwidth and fullwidth forms
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x1F300, 0x1F6FF), // Misc symbols and pictographs, emoticons, transport
    (0x1F900, 0x1F9FF), // Supplemental symbols and pictographs
];

// Break property encoding shared with `glean-unicode`.
const OTHER: u8 = 0;
const CR: u8 = 1;
const LF: u8 = 2;
const CONTROL: u8 = 3;
const EXTEND: u8 = 4;
const ZWJ: u8 = 5;
const REGIONAL_INDICATOR: u8 = 6;
const PREPEND: u8 = 7;
const SPACINGMARK: u8 = 8;
const HANGUL_L: u8 = 9;
const HANGUL_V: u8 = 10;
const HANGUL_T: u8 = 11;
const HANGUL_LV: u8 = 12;
const HANGUL_LVT: u8 = 13;
const EXTPICT: u8 = 18;

const INCB_NONE: u8 = 0;
const INCB_CONSONANT: u8 = 1;
const INCB_EXTEND: u8 = 2;
const INCB_LINKER: u8 = 3;

const FLAG_LETTER: u8 = 1;
const FLAG_PUNCTUATION: u8 = 2;
const FLAG_UPPERCASE: u8 = 4;

struct CharData {
    category: String,
    combining_class: u8,
    /// Canonical (non-compatibility) decomposition, one level deep.
    decomposition: Vec<u32>,
    simple_lowercase: Option<u32>,
    simple_uppercase: Option<u32>,
}

pub(crate) struct UcdData {
    pub(crate) version: String,
    chars: HashMap<u32, CharData>,
    /// Full case folding (statuses C and F).
    case_folding: HashMap<u32, Vec<u32>>,
    grapheme_break: Vec<((u32, u32), u8)>,
    extended_pictographic: Vec<(u32, u32)>,
    indic_conjunct_break: Vec<((u32, u32), u8)>,
}

impl UcdData {
    pub(crate) fn load(ucd: &Path) -> Result<Self> {
        Ok(UcdData {
            version: read_version(ucd).unwrap_or_else(|_| "unknown version".to_owned()),
            chars: load_unicode_data(&read(ucd, "UnicodeData.txt")?)?,
            case_folding: load_case_folding(&read(ucd, "CaseFolding.txt")?)?,
            grapheme_break: load_grapheme_break(&read(
                ucd,
                "auxiliary/GraphemeBreakProperty.txt",
            )?)?,
            extended_pictographic: load_extended_pictographic(&read(
                ucd,
                "emoji/emoji-data.txt",
            )?)?,
            indic_conjunct_break: load_indic_conjunct_break(&read(
                ucd,
                "DerivedCoreProperties.txt",
            )?)?,
        })
    }

    /// The formatted row for `scalar`, or `None` when every property is
    /// defaulted.
    pub(crate) fn row(&self, scalar: char) -> Option<String> {
        let cp = scalar as u32;
        let original = scalar.to_string();

        let normal = self.normalize(&[cp]);
        let folded_case = self.normalize(&self.fold(cp));
        let swapped_case = self.normalize(&[self.swap(cp)]);

        let (category, combining_class) = match self.chars.get(&cp) {
            Some(data) => (data.category.as_str(), data.combining_class),
            None => ("Cn", 0),
        };
        let is_letter = category.starts_with('L');
        let is_punctuation = category.starts_with('P');
        let is_uppercase = self
            .chars
            .get(&cp)
            .is_some_and(|data| data.simple_lowercase.is_some());

        let break_property = self.break_property(cp);
        let indic_conjunct_break = self.indic_property(cp);

        let default = normal == original
            && folded_case == original
            && swapped_case == original
            && !is_letter
            && !is_punctuation
            && !is_uppercase
            && break_property == OTHER
            && combining_class == 0
            && indic_conjunct_break == INCB_NONE;
        if default {
            return None;
        }

        let mut flags = 0;
        if is_letter {
            flags |= FLAG_LETTER;
        }
        if is_punctuation {
            flags |= FLAG_PUNCTUATION;
        }
        if is_uppercase {
            flags |= FLAG_UPPERCASE;
        }

        Some(format!(
            "({}, {}, {}, {}, {}, {}, {}, {}),",
            escape(&original),
            escape(&normal),
            escape(&folded_case),
            escape(&swapped_case),
            flags,
            break_property,
            combining_class,
            indic_conjunct_break,
        ))
    }

    /// Canonical decomposition plus canonical ordering of the result.
    fn normalize(&self, code_points: &[u32]) -> String {
        let mut decomposed = Vec::new();
        for &cp in code_points {
            self.decompose_into(cp, &mut decomposed);
        }

        // Canonical ordering: stable-sort every run of non-starters by their
        // combining class.
        let mut start = 0;
        while start < decomposed.len() {
            if self.combining_class(decomposed[start]) == 0 {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < decomposed.len() && self.combining_class(decomposed[end]) != 0 {
                end += 1;
            }
            decomposed[start..end].sort_by_key(|&cp| self.combining_class(cp));
            start = end;
        }

        decomposed
            .into_iter()
            .filter_map(char::from_u32)
            .collect()
    }

    fn decompose_into(&self, cp: u32, out: &mut Vec<u32>) {
        match self.chars.get(&cp) {
            Some(data) if !data.decomposition.is_empty() => {
                for &part in &data.decomposition {
                    self.decompose_into(part, out);
                }
            }
            _ => out.push(cp),
        }
    }

    fn combining_class(&self, cp: u32) -> u8 {
        self.chars.get(&cp).map_or(0, |data| data.combining_class)
    }

    fn fold(&self, cp: u32) -> Vec<u32> {
        self.case_folding.get(&cp).cloned().unwrap_or_else(|| vec![cp])
    }

    /// Lowercase for uppercase scalars, uppercase for lowercase ones.
    fn swap(&self, cp: u32) -> u32 {
        let Some(data) = self.chars.get(&cp) else {
            return cp;
        };
        data.simple_lowercase
            .or(data.simple_uppercase)
            .unwrap_or(cp)
    }

    fn break_property(&self, cp: u32) -> u8 {
        for ((start, end), property) in &self.grapheme_break {
            if (*start..=*end).contains(&cp) {
                return *property;
            }
        }
        for (start, end) in &self.extended_pictographic {
            if (*start..=*end).contains(&cp) {
                return EXTPICT;
            }
        }
        OTHER
    }

    fn indic_property(&self, cp: u32) -> u8 {
        for ((start, end), property) in &self.indic_conjunct_break {
            if (*start..=*end).contains(&cp) {
                return *property;
            }
        }
        INCB_NONE
    }
}

fn read(ucd: &Path, name: &str) -> Result<String> {
    let path = ucd.join(name);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_version(ucd: &Path) -> Result<String> {
    // ReadMe.txt starts with a line naming the UCD version.
    let readme = read(ucd, "ReadMe.txt")?;
    let line = readme.lines().next().unwrap_or_default();
    Ok(line
        .split_whitespace()
        .find(|word| word.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .unwrap_or("unknown version")
        .to_owned())
}

/// Strip the trailing comment and split a UCD line into `;`-separated fields.
fn data_fields(line: &str) -> Option<Vec<&str>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return None;
    }
    Some(line.split(';').map(str::trim).collect())
}

fn parse_code_point(field: &str) -> Result<u32> {
    u32::from_str_radix(field.trim(), 16)
        .with_context(|| format!("bad code point field `{field}`"))
}

/// Parse a `XXXX` or `XXXX..YYYY` range field.
fn parse_range(field: &str) -> Result<(u32, u32)> {
    match field.trim().split_once("..") {
        Some((start, end)) => Ok((parse_code_point(start)?, parse_code_point(end)?)),
        None => {
            let cp = parse_code_point(field)?;
            Ok((cp, cp))
        }
    }
}

fn load_unicode_data(contents: &str) -> Result<HashMap<u32, CharData>> {
    let mut chars = HashMap::new();

    for line in contents.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 15 {
            continue;
        }
        // Ranged entries (`<Name, First>` / `<Name, Last>`) are the big
        // ideographic and Hangul syllable blocks, none of which fall inside
        // BLOCKS.
        if fields[1].ends_with("First>") || fields[1].ends_with("Last>") {
            continue;
        }

        let cp = parse_code_point(fields[0])?;
        let decomposition = match fields[5] {
            "" => Vec::new(),
            // Compatibility decompositions are tagged `<tag> ...`; only
            // canonical ones participate in NFD.
            tagged if tagged.starts_with('<') => Vec::new(),
            canonical => canonical
                .split_whitespace()
                .map(parse_code_point)
                .collect::<Result<_>>()?,
        };

        chars.insert(
            cp,
            CharData {
                category: fields[2].to_owned(),
                combining_class: fields[3].parse().unwrap_or(0),
                decomposition,
                simple_uppercase: parse_optional_code_point(fields[12])?,
                simple_lowercase: parse_optional_code_point(fields[13])?,
            },
        );
    }

    Ok(chars)
}

fn parse_optional_code_point(field: &str) -> Result<Option<u32>> {
    if field.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parse_code_point(field)?))
    }
}

fn load_case_folding(contents: &str) -> Result<HashMap<u32, Vec<u32>>> {
    let mut folds = HashMap::new();

    for line in contents.lines() {
        let Some(fields) = data_fields(line) else {
            continue;
        };
        if fields.len() < 3 {
            continue;
        }
        // C = common, F = full; S (simple) and T (Turkic) are not wanted.
        if fields[1] != "C" && fields[1] != "F" {
            continue;
        }

        let cp = parse_code_point(fields[0])?;
        let mapping = fields[2]
            .split_whitespace()
            .map(parse_code_point)
            .collect::<Result<Vec<_>>>()?;
        folds.insert(cp, mapping);
    }

    Ok(folds)
}

fn load_grapheme_break(contents: &str) -> Result<Vec<((u32, u32), u8)>> {
    let mut ranges = Vec::new();

    for line in contents.lines() {
        let Some(fields) = data_fields(line) else {
            continue;
        };
        if fields.len() < 2 {
            continue;
        }

        let property = match fields[1] {
            "CR" => CR,
            "LF" => LF,
            "Control" => CONTROL,
            "Extend" => EXTEND,
            "ZWJ" => ZWJ,
            "Regional_Indicator" => REGIONAL_INDICATOR,
            "Prepend" => PREPEND,
            "SpacingMark" => SPACINGMARK,
            "L" => HANGUL_L,
            "V" => HANGUL_V,
            "T" => HANGUL_T,
            "LV" => HANGUL_LV,
            "LVT" => HANGUL_LVT,
            _ => continue,
        };
        ranges.push((parse_range(fields[0])?, property));
    }

    Ok(ranges)
}

fn load_extended_pictographic(contents: &str) -> Result<Vec<(u32, u32)>> {
    let mut ranges = Vec::new();

    for line in contents.lines() {
        let Some(fields) = data_fields(line) else {
            continue;
        };
        if fields.len() < 2 || fields[1] != "Extended_Pictographic" {
            continue;
        }
        ranges.push(parse_range(fields[0])?);
    }

    Ok(ranges)
}

fn load_indic_conjunct_break(contents: &str) -> Result<Vec<((u32, u32), u8)>> {
    let mut ranges = Vec::new();

    for line in contents.lines() {
        let Some(fields) = data_fields(line) else {
            continue;
        };
        if fields.len() < 3 || fields[1] != "InCB" {
            continue;
        }

        let property = match fields[2] {
            "Consonant" => INCB_CONSONANT,
            "Extend" => INCB_EXTEND,
            "Linker" => INCB_LINKER,
            _ => continue,
        };
        ranges.push((parse_range(fields[0])?, property));
    }

    Ok(ranges)
}

fn escape(text: &str) -> String {
    let mut escaped = String::from("\"");
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            ' '..='~' => escaped.push(c),
            other => escaped.push_str(&format!("\\u{{{:04X}}}", other as u32)),
        }
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_fields_parse_single_and_double_forms() {
        assert_eq!(parse_range("0041").unwrap(), (0x41, 0x41));
        assert_eq!(parse_range("1F300..1F320").unwrap(), (0x1F300, 0x1F320));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        assert!(data_fields("# comment").is_none());
        assert!(data_fields("   ").is_none());
        assert_eq!(
            data_fields("0041 ; Value # name").unwrap(),
            vec!["0041", "Value"]
        );
    }

    #[test]
    fn escape_produces_rust_string_literals() {
        assert_eq!(escape("ab"), "\"ab\"");
        assert_eq!(escape("\""), "\"\\\"\"");
        assert_eq!(escape("\u{0301}"), "\"\\u{0301}\"");
    }
}
