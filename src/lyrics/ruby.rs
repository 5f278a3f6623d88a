//! Ruby annotator stage (lyrics only).

use super::rules::{Rule, RE_RUBY};

/// Rule rendering `{漢字|かんじ}` as `<ruby>漢字<rt>かんじ</rt></ruby>`.
pub fn rule() -> Rule {
    Rule::new("ruby", &RE_RUBY, "<ruby>${1}<rt>${2}</rt></ruby>")
}
