//! Raw jamo indices.
//!
//! Consonants occupy 0..=29 and vowels 30..=50, both in Unicode
//! compatibility-jamo order, so `0x3131 + raw` is the bare display character
//! of either kind. Cluster consonants and compound vowels have their own
//! indices even though no single key produces most of them.

use std::fmt;

/// Number of consonant indices (ㄱ..=ㅎ, clusters included).
pub const CONSONANT_COUNT: u8 = 30;
/// Number of vowel indices (ㅏ..=ㅣ, diphthongs included).
pub const VOWEL_COUNT: u8 = 21;
/// First vowel index.
pub const VOWEL_BASE: u8 = CONSONANT_COUNT;

/// A consonant or vowel identified by its raw index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jamo(u8);

impl Jamo {
    pub const KIYEOK: Jamo = Jamo(0);
    pub const SSANGKIYEOK: Jamo = Jamo(1);
    pub const KIYEOK_SIOS: Jamo = Jamo(2);
    pub const NIEUN: Jamo = Jamo(3);
    pub const NIEUN_CIEUC: Jamo = Jamo(4);
    pub const NIEUN_HIEUH: Jamo = Jamo(5);
    pub const TIKEUT: Jamo = Jamo(6);
    pub const SSANGTIKEUT: Jamo = Jamo(7);
    pub const RIEUL: Jamo = Jamo(8);
    pub const RIEUL_KIYEOK: Jamo = Jamo(9);
    pub const RIEUL_MIEUM: Jamo = Jamo(10);
    pub const RIEUL_PIEUP: Jamo = Jamo(11);
    pub const RIEUL_SIOS: Jamo = Jamo(12);
    pub const RIEUL_THIEUTH: Jamo = Jamo(13);
    pub const RIEUL_PHIEUPH: Jamo = Jamo(14);
    pub const RIEUL_HIEUH: Jamo = Jamo(15);
    pub const MIEUM: Jamo = Jamo(16);
    pub const PIEUP: Jamo = Jamo(17);
    pub const SSANGPIEUP: Jamo = Jamo(18);
    pub const PIEUP_SIOS: Jamo = Jamo(19);
    pub const SIOS: Jamo = Jamo(20);
    pub const SSANGSIOS: Jamo = Jamo(21);
    pub const IEUNG: Jamo = Jamo(22);
    pub const CIEUC: Jamo = Jamo(23);
    pub const SSANGCIEUC: Jamo = Jamo(24);
    pub const CHIEUCH: Jamo = Jamo(25);
    pub const KHIEUKH: Jamo = Jamo(26);
    pub const THIEUTH: Jamo = Jamo(27);
    pub const PHIEUPH: Jamo = Jamo(28);
    pub const HIEUH: Jamo = Jamo(29);

    pub const A: Jamo = Jamo(30);
    pub const AE: Jamo = Jamo(31);
    pub const YA: Jamo = Jamo(32);
    pub const YAE: Jamo = Jamo(33);
    pub const EO: Jamo = Jamo(34);
    pub const E: Jamo = Jamo(35);
    pub const YEO: Jamo = Jamo(36);
    pub const YE: Jamo = Jamo(37);
    pub const O: Jamo = Jamo(38);
    pub const WA: Jamo = Jamo(39);
    pub const WAE: Jamo = Jamo(40);
    pub const OE: Jamo = Jamo(41);
    pub const YO: Jamo = Jamo(42);
    pub const U: Jamo = Jamo(43);
    pub const WEO: Jamo = Jamo(44);
    pub const WE: Jamo = Jamo(45);
    pub const WI: Jamo = Jamo(46);
    pub const YU: Jamo = Jamo(47);
    pub const EU: Jamo = Jamo(48);
    pub const YI: Jamo = Jamo(49);
    pub const I: Jamo = Jamo(50);

    /// Build a jamo from a raw index, rejecting anything past ㅣ.
    pub const fn from_raw(raw: u8) -> Option<Jamo> {
        if raw < CONSONANT_COUNT + VOWEL_COUNT {
            Some(Jamo(raw))
        } else {
            None
        }
    }

    /// Raw index.
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_consonant(self) -> bool {
        self.0 < CONSONANT_COUNT
    }

    pub const fn is_vowel(self) -> bool {
        !self.is_consonant()
    }

    /// The compatibility jamo character (U+3131..=U+3163).
    pub fn to_char(self) -> char {
        char::from_u32(0x3131 + self.0 as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Iterate over every consonant index.
    pub fn consonants() -> impl Iterator<Item = Jamo> {
        (0..CONSONANT_COUNT).map(Jamo)
    }

    /// Iterate over every vowel index.
    pub fn vowels() -> impl Iterator<Item = Jamo> {
        (VOWEL_BASE..VOWEL_BASE + VOWEL_COUNT).map(Jamo)
    }
}

impl fmt::Debug for Jamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jamo({} {})", self.0, self.to_char())
    }
}

impl fmt::Display for Jamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
