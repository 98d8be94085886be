//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Strings covering Latin, Cyrillic, mixed case, combining marks,
/// emoji and whitespace.
pub const CORPUS: &[&str] = &[
    "",
    "a",
    "ё",
    "hello",
    "привет",
    "AEIOUaeiou",
    "Мама мыла раму",
    "Съешь же ещё этих мягких французских булок",
    "The quick brown fox jumps over the lazy dog",
    "ЭЮЯ ыи",
    "e\u{301}toile",
    "🦀 rust 🦀",
    "  \t  ",
    "12345",
    "Hello, Мир!",
];

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
