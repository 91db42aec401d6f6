//! Syllable synthesis.
//!
//! A precomposed syllable is `0xAC00 + (cho * 21 + jung) * 28 + jong`, where
//! the three orders come from the tables below. Bare jamo display through the
//! compatibility block instead.

use crate::jamo::{Jamo, VOWEL_BASE};

const SYLLABLE_BASE: u32 = 0xAC00;
const JUNGSUNG_COUNT: u32 = 21;
const JONGSUNG_COUNT: u32 = 28;

/// Chosung order per consonant. Clusters take their second member's order,
/// which is what a cluster lead reads as once a vowel follows it.
const CHOSUNG_ORDER: [u8; 30] = [
    0, 1, 9, 2, 12, 18, 3, 4, 5, 0, 6, 7, 9, 16, 17, 18, 6, 7, 8, 9, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18,
];

/// Jongsung order per consonant; 0 means the consonant cannot close a
/// syllable (ㄸ ㅃ ㅉ).
const JONGSUNG_ORDER: [u8; 30] = [
    1, 2, 3, 4, 5, 6, 7, 0, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 0, 18, 19, 20, 21, 22, 0, 23, 24,
    25, 26, 27,
];

/// Chosung order of a consonant, in 0..=18.
pub fn chosung_order(lead: Jamo) -> u32 {
    CHOSUNG_ORDER
        .get(lead.raw() as usize)
        .copied()
        .unwrap_or(0) as u32
}

/// Jungsung order of a vowel, in 0..=20.
pub fn jungsung_order(vowel: Jamo) -> u32 {
    vowel.raw().saturating_sub(VOWEL_BASE) as u32
}

/// Jongsung order of a consonant, in 0..=27. Zero marks a degenerate final.
pub fn jongsung_order(trail: Jamo) -> u32 {
    JONGSUNG_ORDER
        .get(trail.raw() as usize)
        .copied()
        .unwrap_or(0) as u32
}

/// Compose a syllable block from its parts.
pub fn synthesize(lead: Jamo, vowel: Jamo, trail: Option<Jamo>) -> char {
    let cho = chosung_order(lead);
    let jung = jungsung_order(vowel);
    let jong = trail.map_or(0, jongsung_order);
    let code = SYLLABLE_BASE + (cho * JUNGSUNG_COUNT + jung) * JONGSUNG_COUNT + jong;
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Display of a consonant on its own.
pub fn bare_consonant(consonant: Jamo) -> char {
    char::from_u32(0x3131 + consonant.raw() as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Display of a vowel on its own.
pub fn bare_vowel(vowel: Jamo) -> char {
    char::from_u32(0x314F + jungsung_order(vowel)).unwrap_or(char::REPLACEMENT_CHARACTER)
}
