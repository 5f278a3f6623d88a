//! `LyricsMark` - render tagged lyric paragraphs of a text file to markup.
//!
//! Usage: lyricsmark <input> [output]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use lyricsmark::config::Config;
use lyricsmark::document::render_file;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .context("Usage: lyricsmark <input> [output]")?;
    let output = args.next().map(PathBuf::from);

    let config = Config::load().context("Failed to load config")?;
    let converter = config.converter();

    let (html, summary) = render_file(&converter, &input)?;

    match output {
        Some(path) => {
            fs_err::write(&path, &html)?;
            tracing::info!("Wrote {} converted paragraphs to {}", summary.converted(), path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}
