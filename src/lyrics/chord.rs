//! Chord annotator stage.
//!
//! The simple rule runs first, then the complex rule. Brackets matching
//! neither shape are left as literal text.

use super::rules::{Rule, RE_COMPLEX, RE_SIMPLE_LOOSE, RE_SIMPLE_STRICT};
use crate::types::{BlockKind, ChordStrictness};

/// Rule rendering a bare chord as `<span class='…'>ROOT</span>`.
///
/// [`ChordStrictness::Strict`] accepts exactly one root letter or `N.C.`.
/// [`ChordStrictness::Loose`] accepts any run of root letters, so `[AB]`
/// renders as a single span instead of root `A` with decoration `B`.
pub fn simple_rule(kind: BlockKind, strictness: ChordStrictness) -> Rule {
    let replacement = format!("<span class='{}'>${{1}}</span>", kind.class());
    match strictness {
        ChordStrictness::Strict => Rule::new("simple-strict", &RE_SIMPLE_STRICT, replacement),
        ChordStrictness::Loose => Rule::new("simple-loose", &RE_SIMPLE_LOOSE, replacement),
    }
}

/// Rule rendering a decorated chord as `<span class='…'>ROOT<sub>DEC</sub></span>`.
pub fn complex_rule(kind: BlockKind) -> Rule {
    Rule::new(
        "complex",
        &RE_COMPLEX,
        format!("<span class='{}'>${{1}}<sub>${{2}}</sub></span>", kind.class()),
    )
}

/// Both chord rules in pipeline order.
pub fn rules(kind: BlockKind, strictness: ChordStrictness) -> [Rule; 2] {
    [simple_rule(kind, strictness), complex_rule(kind)]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::rules::RuleSet;

    fn annotate(kind: BlockKind, strictness: ChordStrictness, text: &str) -> String {
        RuleSet::new(rules(kind, strictness)).apply(text)
    }

    #[test]
    fn test_simple_and_no_chord() {
        assert_eq!(
            annotate(BlockKind::Lyrics, ChordStrictness::Strict, "[G]x [N.C.]"),
            "<span class='chord'>G</span>x <span class='chord'>N.C.</span>"
        );
    }

    #[test]
    fn test_complex_with_slash_bass() {
        assert_eq!(
            annotate(BlockKind::Lyrics, ChordStrictness::Strict, "[F#m7/C#]"),
            "<span class='chord'>F<sub>#m7/C#</sub></span>"
        );
        assert_eq!(
            annotate(BlockKind::Lyrics, ChordStrictness::Strict, "[Bb-5]"),
            "<span class='chord'>B<sub>b-5</sub></span>"
        );
    }

    #[test]
    fn test_strict_splits_letter_runs() {
        assert_eq!(
            annotate(BlockKind::Lyrics, ChordStrictness::Strict, "[AB]"),
            "<span class='chord'>A<sub>B</sub></span>"
        );
    }

    #[test]
    fn test_loose_keeps_letter_runs_whole() {
        assert_eq!(
            annotate(BlockKind::Instrument, ChordStrictness::Loose, "[AB]"),
            "<span class='instrument'>AB</span>"
        );
    }

    #[test]
    fn test_loose_does_not_know_no_chord() {
        assert_eq!(
            annotate(BlockKind::Instrument, ChordStrictness::Loose, "[N.C.]"),
            "[N.C.]"
        );
    }

    #[test]
    fn test_invalid_tokens_pass_through() {
        for token in ["[H]", "[xyz123]", "[]", "[Am", "[c]", "[A m]"] {
            assert_eq!(annotate(BlockKind::Lyrics, ChordStrictness::Strict, token), token);
        }
    }
}
