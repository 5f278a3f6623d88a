//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::env as keys;
use crate::error::{Error, Result};
use crate::lyrics::Converter;
use crate::types::{ChordStrictness, PrefixPolicy};

/// Configuration for the converter.
#[derive(Debug, Clone)]
pub struct Config {
    /// What to do when an entry point gets a block without its marker
    pub prefix_policy: PrefixPolicy,
    /// Simple chord rule used for lyrics blocks
    pub lyrics_chords: ChordStrictness,
    /// Simple chord rule used for instrument blocks
    pub instrument_chords: ChordStrictness,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix_policy: PrefixPolicy::default(),
            lyrics_chords: ChordStrictness::Strict,
            instrument_chords: ChordStrictness::Loose,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(keys::PREFIX_POLICY) {
            config.prefix_policy = PrefixPolicy::from_config(&value).ok_or_else(|| {
                Error::config(
                    format!("{}={value:?} is not a prefix policy", keys::PREFIX_POLICY),
                    "Use `require` or `lenient`",
                )
            })?;
        }

        if let Some(value) = lookup(keys::LYRICS_CHORDS) {
            config.lyrics_chords = parse_chord_rule(keys::LYRICS_CHORDS, &value)?;
        }

        if let Some(value) = lookup(keys::INSTRUMENT_CHORDS) {
            config.instrument_chords = parse_chord_rule(keys::INSTRUMENT_CHORDS, &value)?;
        }

        Ok(config)
    }

    /// Build the converter described by this configuration.
    pub fn converter(&self) -> Converter {
        Converter::new(self.prefix_policy, self.lyrics_chords, self.instrument_chords)
    }
}

fn parse_chord_rule(key: &str, value: &str) -> Result<ChordStrictness> {
    ChordStrictness::from_config(value).ok_or_else(|| {
        Error::config(
            format!("{key}={value:?} is not a chord rule"),
            "Use `loose` or `strict`",
        )
    })
}
