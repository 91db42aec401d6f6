//! Key classification for the 2-beolsik (dubeolsik) layout.
//!
//! Each Latin letter key carries one jamo, and the shifted row adds the five
//! tense consonants (ㄲ ㄸ ㅃ ㅆ ㅉ) and the two iotized vowels ㅒ ㅖ.

use crate::jamo::Jamo;

/// Classification of a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoClass {
    Consonant(Jamo),
    Vowel(Jamo),
    /// Not a letter key; handled by the host's plain character path
    NotJamo,
}

impl JamoClass {
    pub fn jamo(self) -> Option<Jamo> {
        match self {
            JamoClass::Consonant(j) | JamoClass::Vowel(j) => Some(j),
            JamoClass::NotJamo => None,
        }
    }
}

/// Raw jamo index per key: `a..=z` unshifted, then `a..=z` shifted.
const KEY_TABLE: [u8; 52] = [
    // a   b   c   d  e  f   g   h   i   j   k   l   m   n   o   p   q  r  s   t   u   v   w   x   y   z
    16, 47, 25, 22, 6, 8, 29, 38, 32, 34, 30, 50, 48, 43, 31, 35, 17, 0, 3, 20, 36, 28, 23, 27, 42, 26,
    16, 47, 25, 22, 7, 8, 29, 38, 32, 34, 30, 50, 48, 43, 33, 37, 18, 1, 3, 21, 36, 28, 24, 27, 42, 26,
];

/// Classify a key code with the current shift variant.
///
/// Uppercase letters always resolve through the shifted row; lowercase
/// letters do when `shifted` is set.
pub fn classify(code: char, shifted: bool) -> JamoClass {
    let slot = match code {
        'a'..='z' => (code as u8 - b'a') as usize + if shifted { 26 } else { 0 },
        'A'..='Z' => (code as u8 - b'A') as usize + 26,
        _ => return JamoClass::NotJamo,
    };

    match Jamo::from_raw(KEY_TABLE[slot]) {
        Some(jamo) if jamo.is_consonant() => JamoClass::Consonant(jamo),
        Some(jamo) => JamoClass::Vowel(jamo),
        None => JamoClass::NotJamo,
    }
}

/// All 52 key bindings as `(key, shifted, jamo)`, for display.
pub fn bindings() -> impl Iterator<Item = (char, bool, Jamo)> {
    KEY_TABLE.iter().enumerate().filter_map(|(slot, &raw)| {
        let key = (b'a' + (slot % 26) as u8) as char;
        Jamo::from_raw(raw).map(|jamo| (key, slot >= 26, jamo))
    })
}
