//! Line wrapper stage.
//!
//! Runs before any annotation so that it only ever sees raw notation.

use super::rules::{Rule, RE_LINE};
use crate::types::BlockKind;

/// Rule wrapping every non-empty line in `<div class='…'>`. Blank lines
/// produce no container.
pub fn line_rule(kind: BlockKind) -> Rule {
    Rule::new(
        "line",
        &RE_LINE,
        format!("<div class='{}'>${{0}}</div>", kind.class()),
    )
}
