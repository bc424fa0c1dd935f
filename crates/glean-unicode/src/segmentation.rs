//! Grapheme cluster segmentation.
//!
//! Implements the extended grapheme cluster boundary rules from
//! <https://www.unicode.org/reports/tr29#Grapheme_Cluster_Boundary_Rules>
//! plus the Indic conjunct break extension (GB9c): a linker between two
//! consonants keeps the whole conjunct in one cluster. A break is inserted
//! only where both rule sets allow one.

use crate::code_point::{BreakProperty, CodePoint, IndicConjunctBreak};

/// Decision for one code point pair, along with the carried state.
struct GraphemeBreak {
    allowed: bool,
    within_emoji_modifier: bool,
    regional_indicator_parity_odd: bool,
}

struct IndicConjunctBreakDecision {
    allowed: bool,
    within_indic_conjunct: bool,
    seen_linker: bool,
}

fn grapheme_break_allowed(
    previous: BreakProperty,
    current: BreakProperty,
    within_emoji_modifier: bool,
    regional_indicator_parity_odd: bool,
) -> GraphemeBreak {
    use BreakProperty::*;

    let decide = |allowed, within_emoji_modifier, regional_indicator_parity_odd| GraphemeBreak {
        allowed,
        within_emoji_modifier,
        regional_indicator_parity_odd,
    };

    // Rules GB1 and GB2 (break at the start and at the end of the text) are
    // handled by the caller.
    match previous {
        Cr => match current {
            // Rule GB3: do not break between a CR and LF.
            Lf => decide(false, within_emoji_modifier, regional_indicator_parity_odd),
            // Rule GB4: otherwise, break after CR.
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
        // Rule GB4: break after controls and LF.
        Control | Lf => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        L => match current {
            // Rule GB6: do not break Hangul syllable sequences.
            // Rules GB9/GB9a: do not break before extending characters,
            // zero-width joiners, or spacing marks.
            L | V | Lv | Lvt | Extend | Zwj | SpacingMark => {
                decide(false, within_emoji_modifier, regional_indicator_parity_odd)
            }
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
        Lv | V => match current {
            // Rule GB7: do not break Hangul syllable sequences.
            V | T | Extend | Zwj | SpacingMark => {
                decide(false, within_emoji_modifier, regional_indicator_parity_odd)
            }
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
        Lvt | T => match current {
            // Rule GB8: do not break Hangul syllable sequences.
            T | Extend | Zwj | SpacingMark => {
                decide(false, within_emoji_modifier, regional_indicator_parity_odd)
            }
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
        Prepend => match current {
            // Rule GB5: break before controls.
            Control | Cr | Lf => {
                decide(true, within_emoji_modifier, regional_indicator_parity_odd)
            }
            // Rule GB9b: do not break after prepend characters.
            _ => decide(false, within_emoji_modifier, regional_indicator_parity_odd),
        },
        Extend => match current {
            // Rule GB9: do not break before extending characters or ZWJ.
            Extend | Zwj => decide(false, within_emoji_modifier, regional_indicator_parity_odd),
            // Rule GB9a: do not break before spacing marks. The emoji
            // modifier sequence is over, though.
            SpacingMark => decide(false, false, regional_indicator_parity_odd),
            _ => decide(true, false, regional_indicator_parity_odd),
        },
        Zwj => match current {
            Extend | Zwj | SpacingMark => decide(false, within_emoji_modifier, false),
            // Rule GB11: do not break within emoji modifier sequences of
            // emoji ZWJ sequences.
            ExtendedPictographic => {
                decide(!within_emoji_modifier, false, regional_indicator_parity_odd)
            }
            _ => decide(true, false, regional_indicator_parity_odd),
        },
        ExtendedPictographic => match current {
            SpacingMark => decide(false, within_emoji_modifier, regional_indicator_parity_odd),
            // Rule GB11: an extend or ZWJ after a pictograph starts (or
            // continues) an emoji modifier sequence.
            Extend | Zwj => decide(false, true, regional_indicator_parity_odd),
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
        RegionalIndicator => match current {
            Extend | Zwj | SpacingMark => decide(false, within_emoji_modifier, false),
            // Rules GB12 and GB13: do not break between regional indicator
            // symbols if there is an odd number of them before the break
            // point.
            RegionalIndicator => decide(
                regional_indicator_parity_odd,
                within_emoji_modifier,
                !regional_indicator_parity_odd,
            ),
            _ => decide(true, within_emoji_modifier, false),
        },
        _ => match current {
            // Rules GB9/GB9a.
            Extend | Zwj | SpacingMark => {
                decide(false, within_emoji_modifier, regional_indicator_parity_odd)
            }
            // Rules GB5 and GB999.
            _ => decide(true, within_emoji_modifier, regional_indicator_parity_odd),
        },
    }
}

fn indic_conjunct_break_allowed(
    previous: IndicConjunctBreak,
    current: IndicConjunctBreak,
    within_indic_conjunct: bool,
    seen_linker: bool,
) -> IndicConjunctBreakDecision {
    use IndicConjunctBreak::*;

    let decide = |allowed, within_indic_conjunct, seen_linker| IndicConjunctBreakDecision {
        allowed,
        within_indic_conjunct,
        seen_linker,
    };

    match previous {
        Consonant => match current {
            Extend | Linker => decide(false, true, false),
            _ => decide(true, false, false),
        },
        Extend => match current {
            Extend | Linker => decide(!within_indic_conjunct, within_indic_conjunct, seen_linker),
            Consonant => decide(!seen_linker, false, false),
            _ => decide(true, false, false),
        },
        Linker => match current {
            Extend | Linker => decide(
                !within_indic_conjunct,
                within_indic_conjunct,
                within_indic_conjunct,
            ),
            Consonant => decide(!within_indic_conjunct, false, within_indic_conjunct),
            _ => decide(true, false, true),
        },
        None => decide(true, false, false),
    }
}

/// Break a sequence of code points into the normalized texts of its grapheme
/// clusters.
pub(crate) fn break_into_characters(code_points: &[&'static CodePoint]) -> Vec<String> {
    let mut characters = Vec::new();
    let Some((first, rest)) = code_points.split_first() else {
        return characters;
    };

    let mut character = first.normal().to_owned();
    let mut previous = *first;

    let mut within_emoji_modifier = false;
    let mut regional_indicator_parity_odd = false;
    let mut within_indic_conjunct = false;
    let mut seen_linker = false;

    for code_point in rest {
        let grapheme = grapheme_break_allowed(
            previous.break_property(),
            code_point.break_property(),
            within_emoji_modifier,
            regional_indicator_parity_odd,
        );
        within_emoji_modifier = grapheme.within_emoji_modifier;
        regional_indicator_parity_odd = grapheme.regional_indicator_parity_odd;

        let indic = indic_conjunct_break_allowed(
            previous.indic_conjunct_break(),
            code_point.indic_conjunct_break(),
            within_indic_conjunct,
            seen_linker,
        );
        within_indic_conjunct = indic.within_indic_conjunct;
        seen_linker = indic.seen_linker;

        if grapheme.allowed && indic.allowed {
            characters.push(std::mem::replace(
                &mut character,
                code_point.normal().to_owned(),
            ));
        } else {
            character.push_str(code_point.normal());
        }

        previous = *code_point;
    }

    characters.push(character);
    characters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_point::break_into_code_points;

    fn clusters(text: &str) -> Vec<String> {
        break_into_characters(&break_into_code_points(text).unwrap())
    }

    #[test]
    fn ascii_splits_per_character() {
        assert_eq!(clusters("foo"), ["f", "o", "o"]);
        assert_eq!(clusters(""), Vec::<String>::new());
    }

    #[test]
    fn crlf_is_one_cluster() {
        assert_eq!(clusters("\r\n"), ["\r\n"]);
        assert_eq!(clusters("\n\r"), ["\n", "\r"]);
        assert_eq!(clusters("a\rb"), ["a", "\r", "b"]);
    }

    #[test]
    fn combining_marks_attach_to_their_base() {
        assert_eq!(clusters("e\u{0301}x"), ["e\u{0301}", "x"]);
        assert_eq!(
            clusters("s\u{0323}\u{0307}s"),
            ["s\u{0323}\u{0307}", "s"]
        );
        // Precomposed scalars segment as one cluster of their normal form.
        assert_eq!(clusters("\u{00E9}x"), ["e\u{0301}", "x"]);
    }

    #[test]
    fn hangul_jamo_form_syllable_clusters() {
        // L V T in sequence is a single syllable.
        assert_eq!(
            clusters("\u{1100}\u{1161}\u{11A8}"),
            ["\u{1100}\u{1161}\u{11A8}"]
        );
        // T cannot follow L directly.
        assert_eq!(clusters("\u{1100}\u{11A8}"), ["\u{1100}", "\u{11A8}"]);
    }

    #[test]
    fn regional_indicators_pair_up() {
        let fr = "\u{1F1EB}\u{1F1F7}";
        assert_eq!(clusters(fr), [fr]);
        let two_flags: Vec<String> = clusters(&format!("{fr}{fr}"));
        assert_eq!(two_flags, [fr, fr]);
    }

    #[test]
    fn emoji_modifiers_and_zwj_sequences_stay_joined() {
        // Thumbs up + skin tone modifier.
        assert_eq!(
            clusters("\u{1F44D}\u{1F3FB}"),
            ["\u{1F44D}\u{1F3FB}"]
        );
        // Woman ZWJ woman is one cluster; a bare pictograph pair is two.
        assert_eq!(
            clusters("\u{1F469}\u{200D}\u{1F469}"),
            ["\u{1F469}\u{200D}\u{1F469}"]
        );
        assert_eq!(
            clusters("\u{1F469}\u{1F469}"),
            ["\u{1F469}", "\u{1F469}"]
        );
    }

    #[test]
    fn indic_conjuncts_keep_the_linker_joined() {
        // KA + VIRAMA + KA is one conjunct cluster.
        assert_eq!(
            clusters("\u{0915}\u{094D}\u{0915}"),
            ["\u{0915}\u{094D}\u{0915}"]
        );
        // Without the linker the consonants split.
        assert_eq!(clusters("\u{0915}\u{0915}"), ["\u{0915}", "\u{0915}"]);
        // A linker followed by ZWJ still joins the next consonant.
        assert_eq!(
            clusters("\u{0915}\u{094D}\u{200D}\u{0915}"),
            ["\u{0915}\u{094D}\u{200D}\u{0915}"]
        );
    }

    #[test]
    fn prepend_joins_the_following_character() {
        // ARABIC NUMBER SIGN is a prepend character.
        assert_eq!(clusters("\u{0600}1"), ["\u{0600}1"]);
        assert_eq!(clusters("\u{0600}\r"), ["\u{0600}", "\r"]);
    }
}
