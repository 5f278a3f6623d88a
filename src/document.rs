//! Paragraph dispatcher.
//!
//! Applies the converter to every tagged paragraph of a document and leaves
//! everything else untouched, the way a page hook would before injecting
//! the markup into the rendered page.

use std::borrow::Cow;
use std::path::Path;

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

use crate::constants::document::PARAGRAPH_BREAK;
use crate::error::{Error, Result};
use crate::lyrics::Converter;
use crate::types::BlockKind;

lazy_static! {
    // Allow unwrap for compile-time constant regex pattern
    #[allow(clippy::unwrap_used)]
    static ref RE_PARAGRAPH_BREAK: Regex = Regex::new(PARAGRAPH_BREAK).unwrap();
}

/// Counts of paragraphs seen by a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Paragraphs converted as lyrics.
    pub lyrics: usize,
    /// Paragraphs converted as instrumental sections.
    pub instrument: usize,
    /// Paragraphs left as-is.
    pub untouched: usize,
}

impl Summary {
    fn record(&mut self, kind: Option<BlockKind>) {
        match kind {
            Some(BlockKind::Lyrics) => self.lyrics += 1,
            Some(BlockKind::Instrument) => self.instrument += 1,
            None => self.untouched += 1,
        }
    }

    /// Total number of converted paragraphs.
    pub const fn converted(&self) -> usize {
        self.lyrics + self.instrument
    }
}

/// Render one paragraph: converted markup if it carries a marker, otherwise
/// the paragraph itself.
pub fn render_paragraph<'a>(converter: &Converter, text: &'a str) -> Cow<'a, str> {
    converter
        .convert_block(text)
        .map_or(Cow::Borrowed(text), |(_, html)| Cow::Owned(html))
}

/// Render a batch of independent paragraphs in parallel, preserving order.
pub fn render_paragraphs(converter: &Converter, paragraphs: &[&str]) -> Vec<String> {
    paragraphs
        .par_iter()
        .map(|p| render_paragraph(converter, p).into_owned())
        .collect()
}

/// Render a plain-text document whose paragraphs are separated by blank lines.
///
/// Any run of blank lines (LF or CRLF, whitespace-only lines included) is one
/// break and is copied to the output unchanged.
pub fn render_document(converter: &Converter, text: &str) -> (String, Summary) {
    let mut summary = Summary::default();
    let mut rendered = String::with_capacity(text.len());
    let mut render = |paragraph: &str, out: &mut String| match converter.convert_block(paragraph) {
        Some((kind, html)) => {
            summary.record(Some(kind));
            out.push_str(&html);
        }
        None => {
            summary.record(None);
            out.push_str(paragraph);
        }
    };

    let mut last = 0;
    for brk in RE_PARAGRAPH_BREAK.find_iter(text) {
        render(&text[last..brk.start()], &mut rendered);
        rendered.push_str(brk.as_str());
        last = brk.end();
    }
    render(&text[last..], &mut rendered);

    tracing::info!(
        "Rendered {} lyrics and {} instrument paragraphs ({} untouched)",
        summary.lyrics,
        summary.instrument,
        summary.untouched
    );

    (rendered, summary)
}

/// Read a document from disk and render it.
pub fn render_file(converter: &Converter, path: &Path) -> Result<(String, Summary)> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    Ok(render_document(converter, &text))
}
