//! Consonant-cluster and vowel-diphthong fusion tables.
//!
//! A fusion rule turns the jamo already staged at a syllable position plus
//! the incoming jamo into one compound jamo. The medial position has its own
//! table; the initial and final positions share the consonant table.

use crate::jamo::Jamo;

/// Syllable position a fusion is attempted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Initial,
    Medial,
    Final,
}

/// `(current, incoming, fused)`
const CONSONANT_CLUSTERS: [(Jamo, Jamo, Jamo); 11] = [
    (Jamo::KIYEOK, Jamo::SIOS, Jamo::KIYEOK_SIOS),
    (Jamo::NIEUN, Jamo::CIEUC, Jamo::NIEUN_CIEUC),
    (Jamo::NIEUN, Jamo::HIEUH, Jamo::NIEUN_HIEUH),
    (Jamo::RIEUL, Jamo::KIYEOK, Jamo::RIEUL_KIYEOK),
    (Jamo::RIEUL, Jamo::MIEUM, Jamo::RIEUL_MIEUM),
    (Jamo::RIEUL, Jamo::PIEUP, Jamo::RIEUL_PIEUP),
    (Jamo::RIEUL, Jamo::SIOS, Jamo::RIEUL_SIOS),
    (Jamo::RIEUL, Jamo::THIEUTH, Jamo::RIEUL_THIEUTH),
    (Jamo::RIEUL, Jamo::PHIEUPH, Jamo::RIEUL_PHIEUPH),
    (Jamo::RIEUL, Jamo::HIEUH, Jamo::RIEUL_HIEUH),
    (Jamo::PIEUP, Jamo::SIOS, Jamo::PIEUP_SIOS),
];

/// `(current, incoming, fused)`
const VOWEL_DIPHTHONGS: [(Jamo, Jamo, Jamo); 17] = [
    (Jamo::O, Jamo::A, Jamo::WA),
    (Jamo::O, Jamo::AE, Jamo::WAE),
    (Jamo::O, Jamo::I, Jamo::OE),
    (Jamo::O, Jamo::O, Jamo::YO),
    (Jamo::WA, Jamo::I, Jamo::WAE),
    (Jamo::U, Jamo::EO, Jamo::WEO),
    (Jamo::U, Jamo::E, Jamo::WE),
    (Jamo::U, Jamo::I, Jamo::WI),
    (Jamo::U, Jamo::U, Jamo::YU),
    (Jamo::WEO, Jamo::I, Jamo::WE),
    (Jamo::EU, Jamo::I, Jamo::YI),
    (Jamo::A, Jamo::A, Jamo::YA),
    (Jamo::A, Jamo::I, Jamo::AE),
    (Jamo::YA, Jamo::I, Jamo::YAE),
    (Jamo::EO, Jamo::I, Jamo::E),
    (Jamo::EO, Jamo::EO, Jamo::YEO),
    (Jamo::YEO, Jamo::I, Jamo::YE),
];

/// Look up the fusion of `current` and `incoming` at `position`.
///
/// Returns `None` when the pair does not fuse.
pub fn fuse(position: Position, current: Jamo, incoming: Jamo) -> Option<Jamo> {
    let table: &[(Jamo, Jamo, Jamo)] = match position {
        Position::Initial | Position::Final => &CONSONANT_CLUSTERS,
        Position::Medial => &VOWEL_DIPHTHONGS,
    };
    table
        .iter()
        .find(|&&(cur, inc, _)| cur == current && inc == incoming)
        .map(|&(_, _, fused)| fused)
}
