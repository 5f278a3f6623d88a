//! Substitution rules and the ordered rule sets built from them.
//!
//! Every pattern is compiled once per process. Each rule rewrites all
//! non-overlapping matches in a single left-to-right pass, so a stage costs
//! time linear in its input.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line: one or more characters that are not line terminators.
    pub(crate) static ref RE_LINE: Regex =
        Regex::new(r"[^\n\r\x{2028}\x{2029}]+").unwrap();

    /// A bracketed token that is exactly one root letter or `N.C.`.
    pub(crate) static ref RE_SIMPLE_STRICT: Regex =
        Regex::new(r"\[([A-G]|N\.C\.)\]").unwrap();

    /// A bracketed run of root letters with no decoration.
    pub(crate) static ref RE_SIMPLE_LOOSE: Regex =
        Regex::new(r"\[([A-G]+)\]").unwrap();

    /// A root letter followed by an ASCII decoration run (quality, accidentals, slash bass).
    pub(crate) static ref RE_COMPLEX: Regex =
        Regex::new(r"\[([A-G])([0-9A-Za-z_#\-/]+)\]").unwrap();

    /// An ideograph run paired with its kana reading.
    pub(crate) static ref RE_RUBY: Regex =
        Regex::new(r"\{([\x{3005}\x{4e00}-\x{9fff}]+)\|([\x{3040}-\x{30ff}]+)\}").unwrap();
}

/// One pattern substitution: every match of `pattern` is replaced with
/// `replacement`, where `${n}` expands to the n-th capture group.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: &'static Regex,
    replacement: String,
}

impl Rule {
    /// Create a rule from a compiled pattern and a replacement template.
    pub fn new(name: &'static str, pattern: &'static Regex, replacement: impl Into<String>) -> Self {
        Self {
            name,
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Short name used in logs and tests.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite every match in `text`; unmatched text is copied verbatim.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// An ordered pipeline of rules. Each rule consumes the previous rule's output.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set that applies `rules` in the given order.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Run every rule in order over `text`.
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// Rule names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Same rules, applied in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            rules: self.rules.iter().rev().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_rule_without_match_copies_input() {
        let rule = Rule::new("ruby", &RE_RUBY, "<ruby>${1}<rt>${2}</rt></ruby>");
        assert_eq!(rule.apply("no annotations {here}"), "no annotations {here}");
    }

    #[test]
    fn test_rule_set_applies_in_order() {
        let set = RuleSet::new([
            Rule::new("strict", &RE_SIMPLE_STRICT, "<${1}>"),
            Rule::new("line", &RE_LINE, "|${0}|"),
        ]);
        assert_eq!(set.names(), vec!["strict", "line"]);
        assert_eq!(set.apply("[C]x"), "|<C>x|");
        assert_eq!(set.reversed().names(), vec!["line", "strict"]);
    }

    #[test]
    fn test_line_pattern_stops_at_all_terminators() {
        let found: Vec<_> = RE_LINE
            .find_iter("a\nb\r\nc\u{2028}d\u{2029}e")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_complex_decoration_is_ascii_only() {
        assert!(RE_COMPLEX.is_match("[Am7b5/G#]"));
        assert!(!RE_COMPLEX.is_match("[Aé]"));
    }

    #[test]
    fn test_ruby_accepts_iteration_mark_and_katakana() {
        let caps = RE_RUBY.captures("{人々|ひとびと}").unwrap();
        assert_eq!(&caps[1], "人々");
        assert!(RE_RUBY.is_match("{東京|トウキョウ}"));
        assert!(!RE_RUBY.is_match("{東京|}"));
        assert!(!RE_RUBY.is_match("{東京とうきょう}"));
    }
}
