//! End-to-end tests for the `lyricsmark` binary.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::Path;
use std::process::{Command, Output};

const SONG: &str = "# Song\n\n{lyrics}\n[C]{空|そら}\n\n{instrument}\n[AB]  [G7]";

const RENDERED: &str = "# Song\n\n\
    \n<div class='chord'><span class='chord'>C</span><ruby>空<rt>そら</rt></ruby></div>\n\n\
    \n<div class='instrument'><span class='instrument'>AB</span>  \
    <span class='instrument'>G<sub>7</sub></span></div>";

// Runs inside `dir` so no stray .env is picked up, with config vars cleared.
fn run_cli(dir: &Path, args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lyricsmark"))
        .current_dir(dir)
        .env_remove("LYRICSMARK_PREFIX_POLICY")
        .env_remove("LYRICSMARK_LYRICS_CHORDS")
        .env_remove("LYRICSMARK_INSTRUMENT_CHORDS")
        .args(args)
        .output()
        .expect("failed to launch lyricsmark")
}

#[test]
fn test_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.md");
    let output = dir.path().join("song.html");
    std::fs::write(&input, SONG).unwrap();

    let out = run_cli(dir.path(), &[&input, &output]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), RENDERED);
}

#[test]
fn test_prints_to_stdout_without_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.md");
    std::fs::write(&input, SONG).unwrap();

    let out = run_cli(dir.path(), &[&input]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), RENDERED);
}

#[test]
fn test_dotenv_selects_chord_rules() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.md");
    std::fs::write(&input, "{instrument}[AB]").unwrap();
    std::fs::write(dir.path().join(".env"), "LYRICSMARK_INSTRUMENT_CHORDS=strict\n").unwrap();

    let out = run_cli(dir.path(), &[&input]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<div class='instrument'><span class='instrument'>A<sub>B</sub></span></div>"
    );
}

#[test]
fn test_missing_arguments_report_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: lyricsmark <input> [output]"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli(dir.path(), &[&dir.path().join("absent.md")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.md"));
}
