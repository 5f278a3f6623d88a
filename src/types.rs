//! Core type definitions for block classification and engine modes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{classes, markers};

/// The kind of a tagged text block, decided by its marker prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Song lyrics with inline chords and ruby pairs.
    Lyrics,
    /// Instrumental section carrying chords only.
    Instrument,
}

impl BlockKind {
    /// Returns all block kinds in classification order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Lyrics, Self::Instrument]
    }

    /// Returns the literal marker prefix for this kind.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Lyrics => markers::LYRICS,
            Self::Instrument => markers::INSTRUMENT,
        }
    }

    /// Returns the CSS class used for line containers and chord spans.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Lyrics => classes::CHORD,
            Self::Instrument => classes::INSTRUMENT,
        }
    }

    /// Returns the human-readable name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lyrics => "Lyrics",
            Self::Instrument => "Instrument",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which simple-chord rule runs before the complex-chord rule.
///
/// Lyrics blocks default to `Strict`, instrument blocks to `Loose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordStrictness {
    /// Whole-token match of a single root letter or `N.C.`.
    Strict,
    /// One or more root letters with no decoration, e.g. `[AB]`.
    Loose,
}

impl ChordStrictness {
    /// Parse a configuration value (`strict` / `loose`, case-insensitive).
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "loose" => Some(Self::Loose),
            _ => None,
        }
    }
}

/// What an entry point does when its block lacks the expected marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrefixPolicy {
    /// Report [`crate::error::Error::MissingPrefix`].
    #[default]
    Require,
    /// Log a warning and convert the whole string as the block body.
    Lenient,
}

impl PrefixPolicy {
    /// Parse a configuration value (`require` / `lenient`, case-insensitive).
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "require" => Some(Self::Require),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}
