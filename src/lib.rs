//! `LyricsMark` - chord and ruby notation to HTML annotation markup.
//!
//! Paragraphs tagged `{lyrics}` or `{instrument}` are converted into nested
//! `<div>`/`<span>`/`<ruby>` markup; untagged paragraphs are left alone.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod lyrics;
pub mod types;

pub use error::{Error, Result};
pub use lyrics::{classify, convert_block, convert_interlude, convert_lyrics, Converter};
pub use types::{BlockKind, ChordStrictness, PrefixPolicy};
