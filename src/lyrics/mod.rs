//! Lyrics notation converter.
//!
//! Turns a tagged block of chord/ruby notation into HTML annotation markup.
//! Lyrics blocks run: line wrap, simple chords (strict by default), complex
//! chords, ruby. Instrument blocks run: line wrap, simple chords (loose by
//! default), complex chords. Every conversion is a pure function of its input.

pub mod chord;
pub mod rules;
pub mod ruby;
pub mod wrap;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::types::{BlockKind, ChordStrictness, PrefixPolicy};
use rules::RuleSet;

lazy_static! {
    static ref DEFAULT_CONVERTER: Converter = Converter::default();
}

/// Classify a block by its marker prefix.
///
/// Case-sensitive, no trimming. `None` means the block is unclassified and
/// should be left untouched.
pub fn classify(text: &str) -> Option<BlockKind> {
    BlockKind::all()
        .iter()
        .copied()
        .find(|kind| text.starts_with(kind.marker()))
}

/// Convert a `{lyrics}` block with the default engine.
pub fn convert_lyrics(text: &str) -> Result<String> {
    DEFAULT_CONVERTER.convert_lyrics(text)
}

/// Convert an `{instrument}` block with the default engine.
pub fn convert_interlude(text: &str) -> Result<String> {
    DEFAULT_CONVERTER.convert_interlude(text)
}

/// Classify and convert with the default engine; `None` for unclassified blocks.
pub fn convert_block(text: &str) -> Option<(BlockKind, String)> {
    DEFAULT_CONVERTER.convert_block(text)
}

/// Annotation engine holding one rule pipeline per block kind.
#[derive(Debug, Clone)]
pub struct Converter {
    prefix_policy: PrefixPolicy,
    lyrics_chords: ChordStrictness,
    instrument_chords: ChordStrictness,
    lyrics: RuleSet,
    instrument: RuleSet,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(PrefixPolicy::default(), ChordStrictness::Strict, ChordStrictness::Loose)
    }
}

impl Converter {
    /// Build an engine with the given prefix policy and simple-chord rules.
    pub fn new(
        prefix_policy: PrefixPolicy,
        lyrics_chords: ChordStrictness,
        instrument_chords: ChordStrictness,
    ) -> Self {
        Self {
            prefix_policy,
            lyrics_chords,
            instrument_chords,
            lyrics: lyrics_rules(lyrics_chords),
            instrument: instrument_rules(instrument_chords),
        }
    }

    /// Replace the prefix policy.
    #[must_use]
    pub fn with_prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.prefix_policy = policy;
        self
    }

    /// Replace the simple-chord rule used for lyrics blocks.
    #[must_use]
    pub fn with_lyrics_chords(mut self, strictness: ChordStrictness) -> Self {
        self.lyrics_chords = strictness;
        self.lyrics = lyrics_rules(strictness);
        self
    }

    /// Replace the simple-chord rule used for instrument blocks.
    #[must_use]
    pub fn with_instrument_chords(mut self, strictness: ChordStrictness) -> Self {
        self.instrument_chords = strictness;
        self.instrument = instrument_rules(strictness);
        self
    }

    /// Current prefix policy.
    pub const fn prefix_policy(&self) -> PrefixPolicy {
        self.prefix_policy
    }

    /// Current lyrics chord rule.
    pub const fn lyrics_chords(&self) -> ChordStrictness {
        self.lyrics_chords
    }

    /// Current instrument chord rule.
    pub const fn instrument_chords(&self) -> ChordStrictness {
        self.instrument_chords
    }

    /// The rule pipeline applied to blocks of `kind`, after the prefix is stripped.
    pub const fn rules(&self, kind: BlockKind) -> &RuleSet {
        match kind {
            BlockKind::Lyrics => &self.lyrics,
            BlockKind::Instrument => &self.instrument,
        }
    }

    /// Convert a block expected to be of `kind`.
    ///
    /// Fails with [`Error::MissingPrefix`] when the marker is absent and the
    /// policy is [`PrefixPolicy::Require`].
    pub fn convert(&self, kind: BlockKind, text: &str) -> Result<String> {
        let body = self.strip_marker(kind, text)?;
        let html = self.rules(kind).apply(body);
        tracing::debug!("Converted {kind} block ({} -> {} bytes)", text.len(), html.len());
        Ok(html)
    }

    /// Convert a `{lyrics}` block.
    pub fn convert_lyrics(&self, text: &str) -> Result<String> {
        self.convert(BlockKind::Lyrics, text)
    }

    /// Convert an `{instrument}` block.
    pub fn convert_interlude(&self, text: &str) -> Result<String> {
        self.convert(BlockKind::Instrument, text)
    }

    /// Classify `text` and convert it; `None` when it carries no marker.
    pub fn convert_block(&self, text: &str) -> Option<(BlockKind, String)> {
        let kind = classify(text)?;
        let body = text.strip_prefix(kind.marker())?;
        Some((kind, self.rules(kind).apply(body)))
    }

    fn strip_marker<'a>(&self, kind: BlockKind, text: &'a str) -> Result<&'a str> {
        if let Some(body) = text.strip_prefix(kind.marker()) {
            return Ok(body);
        }
        match self.prefix_policy {
            PrefixPolicy::Require => Err(Error::MissingPrefix { expected: kind.marker() }),
            PrefixPolicy::Lenient => {
                tracing::warn!("{kind} block is missing its {} marker; converting as-is", kind.marker());
                Ok(text)
            }
        }
    }
}

fn lyrics_rules(strictness: ChordStrictness) -> RuleSet {
    let kind = BlockKind::Lyrics;
    let [simple, complex] = chord::rules(kind, strictness);
    RuleSet::new([wrap::line_rule(kind), simple, complex, ruby::rule()])
}

fn instrument_rules(strictness: ChordStrictness) -> RuleSet {
    let kind = BlockKind::Instrument;
    let [simple, complex] = chord::rules(kind, strictness);
    RuleSet::new([wrap::line_rule(kind), simple, complex])
}
