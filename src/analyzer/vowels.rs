//! Fixed vowel membership for Latin and Cyrillic text.

/// Every character counted as a vowel. Both cases are listed explicitly,
/// so membership is a plain equality test with no case folding.
pub const VOWELS: &[char] = &[
    // Latin
    'a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U',
    // Cyrillic
    'а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я',
    'А', 'Е', 'Ё', 'И', 'О', 'У', 'Ы', 'Э', 'Ю', 'Я',
];

/// Returns `true` if `c` belongs to the vowel set.
#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}
