//! The jamo composition automaton.
//!
//! `CompositionAutomaton` stages consonant and vowel keys into one syllable at
//! a time and reports every visible change to a `ComposingSink`. Keys are an
//! exhaustive `match` over `(Phase, JamoClass)`, deletes over `Phase`.
//!
//! Whenever the span identity changes (a new span is appended after the
//! current one) the automaton first re-asserts the character it last showed
//! with a `Replace`, so the host never finalizes a stale character.

use libkorean_core::{ComposingSink, Composer, KeyResult};

use crate::cluster::{fuse, Position};
use crate::config::HangulConfig;
use crate::jamo::Jamo;
use crate::keymap::{self, JamoClass};
use crate::synth::{bare_consonant, bare_vowel, jongsung_order, synthesize};

/// How far the current syllable has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing staged
    #[default]
    Empty,
    /// One initial consonant
    Lead,
    /// Initial consonant pair fused into a cluster
    LeadCluster,
    /// A vowel with no initial consonant
    Vowel,
    /// Initial consonant and vowel
    LeadVowel,
    /// Initial, vowel and one final consonant
    LeadVowelTrail,
    /// Initial, vowel and a final cluster
    LeadVowelTrailCluster,
}

/// Staged jamo of the syllable in progress.
///
/// Each position keeps two slots: the jamo typed first and the one fused into
/// it, if any. `resolved_*` is what gets displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyllableBuildState {
    lead: [Option<Jamo>; 2],
    medial: [Option<Jamo>; 2],
    trail: [Option<Jamo>; 2],
    resolved_lead: Option<Jamo>,
    resolved_vowel: Option<Jamo>,
    resolved_trail: Option<Jamo>,
}

impl SyllableBuildState {
    fn lead_only(lead: Jamo) -> Self {
        Self {
            lead: [Some(lead), None],
            resolved_lead: Some(lead),
            ..Self::default()
        }
    }

    fn vowel_only(vowel: Jamo) -> Self {
        Self {
            medial: [Some(vowel), None],
            resolved_vowel: Some(vowel),
            ..Self::default()
        }
    }

    fn open_syllable(lead: Option<Jamo>, vowel: Jamo) -> Self {
        Self {
            lead: [lead, None],
            resolved_lead: lead,
            ..Self::vowel_only(vowel)
        }
    }

    pub fn lead(&self) -> Option<Jamo> {
        self.resolved_lead
    }

    pub fn vowel(&self) -> Option<Jamo> {
        self.resolved_vowel
    }

    pub fn trail(&self) -> Option<Jamo> {
        self.resolved_trail
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Phase implied by the staged slots.
    pub fn phase(&self) -> Phase {
        match (self.resolved_lead, self.resolved_vowel, self.resolved_trail) {
            (None, None, _) => Phase::Empty,
            (Some(_), None, _) if self.lead[1].is_some() => Phase::LeadCluster,
            (Some(_), None, _) => Phase::Lead,
            (None, Some(_), _) => Phase::Vowel,
            (Some(_), Some(_), None) => Phase::LeadVowel,
            (Some(_), Some(_), Some(_)) if self.trail[1].is_some() => Phase::LeadVowelTrailCluster,
            (Some(_), Some(_), Some(_)) => Phase::LeadVowelTrail,
        }
    }

    /// Character currently shown for this syllable.
    pub fn display(&self) -> Option<char> {
        match (self.resolved_lead, self.resolved_vowel) {
            (None, None) => None,
            (Some(lead), None) => Some(bare_consonant(lead)),
            (None, Some(vowel)) => Some(bare_vowel(vowel)),
            (Some(lead), Some(vowel)) => Some(synthesize(lead, vowel, self.resolved_trail)),
        }
    }

    fn fuse_lead(&mut self, incoming: Jamo, fused: Jamo) {
        self.lead[1] = Some(incoming);
        self.resolved_lead = Some(fused);
    }

    /// Undo a lead cluster, returning its second member.
    fn split_lead(&mut self) -> Option<Jamo> {
        self.resolved_lead = self.lead[0];
        self.lead[1].take()
    }

    fn set_vowel(&mut self, vowel: Jamo) {
        self.medial = [Some(vowel), None];
        self.resolved_vowel = Some(vowel);
    }

    fn fuse_vowel(&mut self, incoming: Jamo, fused: Jamo) {
        self.medial = [self.resolved_vowel, Some(incoming)];
        self.resolved_vowel = Some(fused);
    }

    /// Undo the last vowel fusion. Returns false when there was none.
    fn unfuse_vowel(&mut self) -> bool {
        if self.medial[1].take().is_none() {
            return false;
        }
        self.resolved_vowel = self.medial[0];
        true
    }

    fn drop_vowel(&mut self) {
        self.medial = [None, None];
        self.resolved_vowel = None;
    }

    fn set_trail(&mut self, trail: Jamo) {
        self.trail = [Some(trail), None];
        self.resolved_trail = Some(trail);
    }

    fn fuse_trail(&mut self, incoming: Jamo, fused: Jamo) {
        self.trail[1] = Some(incoming);
        self.resolved_trail = Some(fused);
    }

    /// Remove the single final consonant, returning it.
    fn take_trail(&mut self) -> Option<Jamo> {
        self.resolved_trail = None;
        self.trail[1] = None;
        self.trail[0].take()
    }

    /// Undo a final cluster, returning its second member.
    fn split_trail(&mut self) -> Option<Jamo> {
        self.resolved_trail = self.trail[0];
        self.trail[1].take()
    }
}

/// 2-beolsik composition automaton.
#[derive(Debug, Clone)]
pub struct CompositionAutomaton {
    state: SyllableBuildState,
    lead_clusters: bool,
}

impl Default for CompositionAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionAutomaton {
    pub fn new() -> Self {
        Self {
            state: SyllableBuildState::default(),
            lead_clusters: true,
        }
    }

    pub fn with_config(config: &HangulConfig) -> Self {
        Self::new().with_lead_clusters(config.lead_clusters)
    }

    /// Whether two initial consonants may fuse into a cluster (ㄱ+ㅅ→ㄳ).
    pub fn with_lead_clusters(mut self, enabled: bool) -> Self {
        self.lead_clusters = enabled;
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &SyllableBuildState {
        &self.state
    }

    /// Character of the syllable in progress, if any.
    pub fn display(&self) -> Option<char> {
        self.state.display()
    }

    /// Advance the automaton with one classified key.
    ///
    /// `NotJamo` commits the staged syllable and is reported as not handled.
    pub fn feed(&mut self, class: JamoClass, sink: &mut dyn ComposingSink) -> KeyResult {
        let from = self.phase();

        match (from, class) {
            (_, JamoClass::NotJamo) => {
                self.flush(sink);
                return KeyResult::NotHandled;
            }

            (Phase::Empty, JamoClass::Consonant(c)) => {
                self.state = SyllableBuildState::lead_only(c);
                sink.start_new(bare_consonant(c));
            }
            (Phase::Empty, JamoClass::Vowel(v)) => {
                self.state = SyllableBuildState::vowel_only(v);
                sink.start_new(bare_vowel(v));
            }

            (Phase::Lead, JamoClass::Consonant(c)) => {
                let fused = self
                    .state
                    .lead()
                    .filter(|_| self.lead_clusters)
                    .and_then(|first| fuse(Position::Initial, first, c));
                match fused {
                    Some(fused) => {
                        self.state.fuse_lead(c, fused);
                        self.show(sink);
                    }
                    None => self.restart_with(SyllableBuildState::lead_only(c), sink),
                }
            }
            (Phase::Lead, JamoClass::Vowel(v)) => {
                self.state.set_vowel(v);
                self.show(sink);
            }

            // The cluster cannot grow; its first member stays behind alone.
            (Phase::LeadCluster, JamoClass::Consonant(c)) => {
                self.state.split_lead();
                self.restart_with(SyllableBuildState::lead_only(c), sink);
            }
            // The cluster splits and its second member leads the new syllable.
            (Phase::LeadCluster, JamoClass::Vowel(v)) => {
                let moved = self.state.split_lead();
                self.restart_with(SyllableBuildState::open_syllable(moved, v), sink);
            }

            (Phase::Vowel, JamoClass::Consonant(c)) => {
                self.restart_with(SyllableBuildState::lead_only(c), sink);
            }
            (Phase::Vowel, JamoClass::Vowel(v)) | (Phase::LeadVowel, JamoClass::Vowel(v)) => {
                match self.state.vowel().and_then(|cur| fuse(Position::Medial, cur, v)) {
                    Some(fused) => {
                        self.state.fuse_vowel(v, fused);
                        self.show(sink);
                    }
                    None => self.restart_with(SyllableBuildState::vowel_only(v), sink),
                }
            }

            (Phase::LeadVowel, JamoClass::Consonant(c)) => {
                if jongsung_order(c) == 0 {
                    // ㄸ ㅃ ㅉ never close a syllable
                    self.restart_with(SyllableBuildState::lead_only(c), sink);
                } else {
                    self.state.set_trail(c);
                    self.show(sink);
                }
            }

            (Phase::LeadVowelTrail, JamoClass::Consonant(c)) => {
                match self.state.trail().and_then(|cur| fuse(Position::Final, cur, c)) {
                    Some(fused) => {
                        self.state.fuse_trail(c, fused);
                        self.show(sink);
                    }
                    None => self.restart_with(SyllableBuildState::lead_only(c), sink),
                }
            }
            // The final consonant moves over to lead the new syllable.
            (Phase::LeadVowelTrail, JamoClass::Vowel(v)) => {
                let moved = self.state.take_trail();
                self.restart_with(SyllableBuildState::open_syllable(moved, v), sink);
            }

            (Phase::LeadVowelTrailCluster, JamoClass::Consonant(c)) => {
                self.restart_with(SyllableBuildState::lead_only(c), sink);
            }
            // Only the cluster's second member moves; the first stays final.
            (Phase::LeadVowelTrailCluster, JamoClass::Vowel(v)) => {
                let moved = self.state.split_trail();
                self.restart_with(SyllableBuildState::open_syllable(moved, v), sink);
            }
        }

        tracing::debug!(?from, to = ?self.phase(), ?class, "jamo transition");
        KeyResult::Handled
    }

    /// Undo one step of the syllable in progress.
    ///
    /// Returns `NotHandled` when nothing is staged, leaving the delete to the
    /// host.
    pub fn delete(&mut self, sink: &mut dyn ComposingSink) -> KeyResult {
        let from = self.phase();

        match from {
            Phase::Empty => return KeyResult::NotHandled,
            Phase::Lead => {
                self.state = SyllableBuildState::default();
                sink.clear();
            }
            Phase::LeadCluster => {
                self.state.split_lead();
                self.show(sink);
            }
            Phase::Vowel => {
                if self.state.unfuse_vowel() {
                    self.show(sink);
                } else {
                    self.state = SyllableBuildState::default();
                    sink.clear();
                }
            }
            Phase::LeadVowel => {
                if !self.state.unfuse_vowel() {
                    self.state.drop_vowel();
                }
                self.show(sink);
            }
            Phase::LeadVowelTrail => {
                self.state.take_trail();
                self.show(sink);
            }
            Phase::LeadVowelTrailCluster => {
                self.state.split_trail();
                self.show(sink);
            }
        }

        tracing::debug!(?from, to = ?self.phase(), "jamo delete");
        KeyResult::Handled
    }

    /// Replace the span with the current display.
    fn show(&self, sink: &mut dyn ComposingSink) {
        if let Some(ch) = self.state.display() {
            sink.replace(ch);
        }
    }

    /// Finish the current syllable as displayed and begin `next` in a new span.
    fn restart_with(&mut self, next: SyllableBuildState, sink: &mut dyn ComposingSink) {
        self.show(sink);
        self.state = next;
        if let Some(ch) = self.state.display() {
            sink.append_as_new_span(ch);
        }
    }
}

impl Composer for CompositionAutomaton {
    fn compose(&mut self, key: char, shifted: bool, sink: &mut dyn ComposingSink) -> KeyResult {
        self.feed(keymap::classify(key, shifted), sink)
    }

    fn backspace(&mut self, sink: &mut dyn ComposingSink) -> KeyResult {
        self.delete(sink)
    }

    fn flush(&mut self, sink: &mut dyn ComposingSink) {
        if self.phase() != Phase::Empty {
            tracing::debug!(display = ?self.display(), "committing syllable");
            sink.commit();
        }
        self.state = SyllableBuildState::default();
    }

    fn reset(&mut self) {
        self.state = SyllableBuildState::default();
    }

    fn is_composing(&self) -> bool {
        self.phase() != Phase::Empty
    }

    fn name(&self) -> &'static str {
        "hangul-2beolsik"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libkorean_core::SpanOp;

    fn feed_keys(automaton: &mut CompositionAutomaton, keys: &str) -> Vec<SpanOp> {
        let mut ops: Vec<SpanOp> = Vec::new();
        for key in keys.chars() {
            automaton.compose(key, false, &mut ops);
        }
        ops
    }

    #[test]
    fn test_phase_progression() {
        let mut automaton = CompositionAutomaton::new();
        let mut ops: Vec<SpanOp> = Vec::new();

        assert_eq!(automaton.phase(), Phase::Empty);
        automaton.compose('g', false, &mut ops);
        assert_eq!(automaton.phase(), Phase::Lead);
        automaton.compose('k', false, &mut ops);
        assert_eq!(automaton.phase(), Phase::LeadVowel);
        automaton.compose('s', false, &mut ops);
        assert_eq!(automaton.phase(), Phase::LeadVowelTrail);
        automaton.compose('w', false, &mut ops);
        assert_eq!(automaton.phase(), Phase::LeadVowelTrailCluster);
        assert_eq!(
            automaton.display(),
            Some(synthesize(Jamo::HIEUH, Jamo::A, Some(Jamo::NIEUN_CIEUC)))
        );
        assert_eq!(automaton.state().trail(), Some(Jamo::NIEUN_CIEUC));
    }

    #[test]
    fn test_lead_cluster_then_consonant() {
        let mut automaton = CompositionAutomaton::new();
        let ops = feed_keys(&mut automaton, "rtg");
        assert_eq!(
            ops,
            vec![
                SpanOp::StartNew('ㄱ'),
                SpanOp::Replace('ㄳ'),
                SpanOp::Replace('ㄱ'),
                SpanOp::AppendAsNewSpan('ㅎ'),
            ]
        );
        assert_eq!(automaton.phase(), Phase::Lead);
    }

    #[test]
    fn test_lead_cluster_splits_before_vowel() {
        let mut automaton = CompositionAutomaton::new();
        let ops = feed_keys(&mut automaton, "rtk");
        assert_eq!(
            ops,
            vec![
                SpanOp::StartNew('ㄱ'),
                SpanOp::Replace('ㄳ'),
                SpanOp::Replace('ㄱ'),
                SpanOp::AppendAsNewSpan('사'),
            ]
        );
        assert_eq!(automaton.phase(), Phase::LeadVowel);
    }

    #[test]
    fn test_lead_clusters_disabled() {
        let mut automaton = CompositionAutomaton::new().with_lead_clusters(false);
        let ops = feed_keys(&mut automaton, "rt");
        assert_eq!(
            ops,
            vec![
                SpanOp::StartNew('ㄱ'),
                SpanOp::Replace('ㄱ'),
                SpanOp::AppendAsNewSpan('ㅅ'),
            ]
        );
        assert_eq!(automaton.phase(), Phase::Lead);
    }

    #[test]
    fn test_degenerate_final_starts_new_syllable() {
        let mut automaton = CompositionAutomaton::new();
        let ops = feed_keys(&mut automaton, "rk");
        assert_eq!(ops, vec![SpanOp::StartNew('ㄱ'), SpanOp::Replace('가')]);

        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.compose('E', false, &mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('가'), SpanOp::AppendAsNewSpan('ㄸ')]);
        assert_eq!(automaton.phase(), Phase::Lead);
    }

    #[test]
    fn test_trail_cluster_splits_before_vowel() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "dlfr");
        assert_eq!(automaton.display(), Some('읽'));

        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.compose('j', false, &mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('일'), SpanOp::AppendAsNewSpan('거')]);
        assert_eq!(automaton.phase(), Phase::LeadVowel);
    }

    #[test]
    fn test_trail_cluster_then_consonant() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "dlfr");
        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.compose('r', false, &mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('읽'), SpanOp::AppendAsNewSpan('ㄱ')]);
    }

    #[test]
    fn test_vowel_only_syllable() {
        let mut automaton = CompositionAutomaton::new();
        let ops = feed_keys(&mut automaton, "hkr");
        assert_eq!(
            ops,
            vec![
                SpanOp::StartNew('ㅗ'),
                SpanOp::Replace('ㅘ'),
                SpanOp::Replace('ㅘ'),
                SpanOp::AppendAsNewSpan('ㄱ'),
            ]
        );
    }

    #[test]
    fn test_vowel_without_fusion_starts_new_span() {
        let mut automaton = CompositionAutomaton::new();
        let ops = feed_keys(&mut automaton, "rkh");
        assert_eq!(
            ops,
            vec![
                SpanOp::StartNew('ㄱ'),
                SpanOp::Replace('가'),
                SpanOp::Replace('가'),
                SpanOp::AppendAsNewSpan('ㅗ'),
            ]
        );
        assert_eq!(automaton.phase(), Phase::Vowel);
    }

    #[test]
    fn test_delete_unwinds_vowel_fusion() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "rhk");
        assert_eq!(automaton.display(), Some('과'));

        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.delete(&mut ops);
        automaton.delete(&mut ops);
        automaton.delete(&mut ops);
        assert_eq!(
            ops,
            vec![SpanOp::Replace('고'), SpanOp::Replace('ㄱ'), SpanOp::Clear]
        );
        assert!(automaton.state().is_empty());
    }

    #[test]
    fn test_delete_unwinds_clusters() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "rt");
        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.delete(&mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('ㄱ')]);
        assert_eq!(automaton.phase(), Phase::Lead);

        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "dlfr");
        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.delete(&mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('일')]);
        assert_eq!(automaton.phase(), Phase::LeadVowelTrail);
    }

    #[test]
    fn test_three_key_diphthong_unwinds_in_two() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "hkl");
        assert_eq!(automaton.display(), Some('ㅙ'));

        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.delete(&mut ops);
        automaton.delete(&mut ops);
        assert_eq!(ops, vec![SpanOp::Replace('ㅘ'), SpanOp::Clear]);
        assert_eq!(automaton.phase(), Phase::Empty);
    }

    #[test]
    fn test_flush() {
        let mut automaton = CompositionAutomaton::new();
        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.flush(&mut ops);
        assert!(ops.is_empty());

        feed_keys(&mut automaton, "gks");
        automaton.flush(&mut ops);
        assert_eq!(ops, vec![SpanOp::Commit]);
        assert!(!automaton.is_composing());
        assert!(automaton.state().is_empty());
    }

    #[test]
    fn test_non_jamo_commits() {
        let mut automaton = CompositionAutomaton::new();
        let mut ops: Vec<SpanOp> = Vec::new();
        automaton.compose('g', false, &mut ops);
        let result = automaton.compose('1', false, &mut ops);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(ops, vec![SpanOp::StartNew('ㅎ'), SpanOp::Commit]);

        let result = automaton.compose('1', false, &mut ops);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn test_reset_is_silent() {
        let mut automaton = CompositionAutomaton::new();
        feed_keys(&mut automaton, "gk");
        automaton.reset();
        assert_eq!(automaton.phase(), Phase::Empty);
        assert_eq!(automaton.display(), None);
    }

    #[test]
    fn test_with_config() {
        let config = HangulConfig {
            lead_clusters: false,
            ..HangulConfig::default()
        };
        let mut automaton = CompositionAutomaton::with_config(&config);
        feed_keys(&mut automaton, "rt");
        assert_eq!(automaton.state().lead(), Some(Jamo::SIOS));
        assert_eq!(automaton.name(), "hangul-2beolsik");
    }
}
