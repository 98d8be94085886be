//! Unicode-aware text analysis.
//!
//! Every operation works on decoded code points (`char`), never on the
//! underlying UTF-8 bytes, so Cyrillic and other multi-byte text is
//! measured, reversed and counted one character at a time.

mod vowels;

use serde::Serialize;

pub use vowels::{is_vowel, VOWELS};

/// Result of analyzing one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub length: usize,
    pub reversed: String,
    pub vowels: usize,
}

/// Number of code points in `text`.
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// Returns `text` with its code points in reverse order.
///
/// Two indices walk inward from both ends of the decoded buffer, swapping
/// as they go, until they meet.
pub fn reverse(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let (mut i, mut j) = (0, chars.len() - 1);
    while i < j {
        chars.swap(i, j);
        i += 1;
        j -= 1;
    }

    chars.into_iter().collect()
}

/// Number of code points in `text` that belong to [`VOWELS`].
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// Runs all three analyses over `text`.
pub fn analyze(text: &str) -> TextReport {
    let report = TextReport {
        length: length(text),
        reversed: reverse(text),
        vowels: count_vowels(text),
    };
    tracing::debug!(
        bytes = text.len(),
        length = report.length,
        vowels = report.vowels,
        "Analyzed text"
    );
    report
}
