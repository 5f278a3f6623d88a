//! Notation constants.
//!
//! Centralizes marker prefixes and markup class names so the output
//! vocabulary stays stable for downstream stylesheets.

/// Block marker prefixes.
pub mod markers {
    /// Prefix that tags a paragraph as a lyrics block.
    pub const LYRICS: &str = "{lyrics}";

    /// Prefix that tags a paragraph as an instrumental block.
    pub const INSTRUMENT: &str = "{instrument}";
}

/// CSS classes emitted in the generated markup.
pub mod classes {
    /// Class for lyrics line containers and lyrics chord spans.
    pub const CHORD: &str = "chord";

    /// Class for instrumental line containers and chord spans.
    pub const INSTRUMENT: &str = "instrument";
}

/// Document layout constants.
pub mod document {
    /// Pattern for a paragraph break: a line end followed by one or more
    /// blank (or whitespace-only) lines, LF or CRLF.
    pub const PARAGRAPH_BREAK: &str = r"\r?\n(?:[ \t]*\r?\n)+";
}

/// Environment variable names read by [`crate::config::Config`].
pub mod env {
    /// Prefix handling policy (`require` or `lenient`).
    pub const PREFIX_POLICY: &str = "LYRICSMARK_PREFIX_POLICY";

    /// Simple chord rule used for lyrics blocks (`strict` or `loose`).
    pub const LYRICS_CHORDS: &str = "LYRICSMARK_LYRICS_CHORDS";

    /// Simple chord rule used for instrumental blocks (`loose` or `strict`).
    pub const INSTRUMENT_CHORDS: &str = "LYRICSMARK_INSTRUMENT_CHORDS";
}
