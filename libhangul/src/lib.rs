//! # libhangul
//!
//! Hangul 2-beolsik input method engine built on libkorean-core.
//!
//! Letter keys are classified into jamo (`keymap`), fused into clusters and
//! diphthongs (`cluster`), and assembled into precomposed syllables
//! (`synth`) by the `CompositionAutomaton`, which reports each change of the
//! provisional text to a `ComposingSink`.
//!
//! ```rust
//! use libhangul::{create_ime_engine, Composition, HangulConfig, KeyEvent, KeyResult};
//!
//! let mut ime = create_ime_engine(HangulConfig::default());
//! let mut doc = Composition::new();
//! for ch in "gksrmf".chars() {
//!     if ime.process_key(KeyEvent::Char(ch), &mut doc) == KeyResult::NotHandled {
//!         doc.insert_char(ch);
//!     }
//! }
//! assert_eq!(doc.text(), "한글");
//! ```

pub mod automaton;
pub mod cluster;
pub mod config;
pub mod jamo;
pub mod keymap;
pub mod script;
pub mod synth;

// Re-export IME components from core
pub use libkorean_core::{
    ComposingSink, Composer, Composition, ImeEngine, ImeSession, InputMode, KeyEvent, KeyResult,
    ShiftState, SpanOp,
};

pub use automaton::{CompositionAutomaton, Phase, SyllableBuildState};
pub use cluster::{fuse, Position};
pub use config::HangulConfig;
pub use jamo::Jamo;
pub use keymap::{classify, JamoClass};
pub use synth::synthesize;

/// Build an IME engine around a 2-beolsik automaton.
pub fn create_ime_engine(config: HangulConfig) -> ImeEngine<CompositionAutomaton> {
    let automaton = CompositionAutomaton::with_config(&config);
    ImeEngine::with_config(automaton, config.into_base())
}
