//! Integration tests for the text analyzer.

mod common;

use basic_types::analyzer::{analyze, count_vowels, is_vowel, length, reverse, VOWELS};
use common::CORPUS;

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn reverse_preserves_length() {
    for s in CORPUS {
        assert_eq!(length(s), length(&reverse(s)), "input: {s:?}");
    }
}

#[test]
fn reverse_is_an_involution() {
    for s in CORPUS {
        assert_eq!(reverse(&reverse(s)), *s, "input: {s:?}");
    }
}

#[test]
fn vowel_count_ignores_order() {
    for s in CORPUS {
        assert_eq!(count_vowels(s), count_vowels(&reverse(s)), "input: {s:?}");
    }
}

#[test]
fn length_matches_char_count_not_bytes() {
    for s in CORPUS {
        assert_eq!(length(s), s.chars().count(), "input: {s:?}");
    }
    assert!(length("привет") < "привет".len());
}

// =============================================================================
// EXAMPLES
// =============================================================================

#[test]
fn empty_string() {
    assert_eq!(length(""), 0);
    assert_eq!(reverse(""), "");
    assert_eq!(count_vowels(""), 0);
}

#[test]
fn hello() {
    assert_eq!(reverse("hello"), "olleh");
    assert_eq!(count_vowels("hello"), 2);
}

#[test]
fn privet() {
    assert_eq!(length("привет"), 6);
    assert_eq!(reverse("привет"), "тевирп");
    assert_eq!(count_vowels("привет"), 2);
}

#[test]
fn mixed_case_latin() {
    assert_eq!(count_vowels("AEIOUaeiou"), 10);
}

#[test]
fn pangram_vowels() {
    assert_eq!(
        count_vowels("Съешь же ещё этих мягких французских булок"),
        13
    );
}

#[test]
fn y_is_not_a_vowel() {
    assert_eq!(count_vowels("yY"), 0);
    assert!(!VOWELS.contains(&'y'));
}

#[test]
fn combining_marks_reverse_per_code_point() {
    // "e" + U+0301 is two code points; reversal moves the mark before the "e"
    assert_eq!(reverse("e\u{301}x"), "x\u{301}e");
    assert_eq!(length("e\u{301}x"), 3);
}

#[test]
fn vowel_set_is_case_expanded() {
    for c in VOWELS {
        assert!(is_vowel(*c));
        if c.is_lowercase() {
            let upper: Vec<char> = c.to_uppercase().collect();
            assert!(VOWELS.contains(&upper[0]), "{c} missing uppercase");
        }
    }
}

#[test]
fn analyze_report() {
    let report = analyze("Hello, Мир!");
    assert_eq!(report.length, 11);
    assert_eq!(report.reversed, "!риМ ,olleH");
    assert_eq!(report.vowels, 3);
}
