// core/src/engine.rs
//
// The seam between the generic key routing in `ImeEngine` and a
// language-specific composition engine.

use crate::ime_engine::KeyResult;
use crate::sink::ComposingSink;

/// Trait that composition engines implement to be driven by `ImeEngine`.
///
/// A composer owns the state of the syllable in progress. Every method that
/// changes what the user sees reports it through the sink, in order.
pub trait Composer {
    /// Feed one character key with the current shift variant.
    ///
    /// Returns `KeyResult::NotHandled` for keys the composer does not compose.
    /// Before returning `NotHandled` the composer must have committed whatever
    /// it had staged, so the host can insert the key after it.
    fn compose(&mut self, key: char, shifted: bool, sink: &mut dyn ComposingSink) -> KeyResult;

    /// Undo one step of composition.
    ///
    /// Returns `KeyResult::NotHandled` when nothing is staged, so the host
    /// applies its own backspace to committed text.
    fn backspace(&mut self, sink: &mut dyn ComposingSink) -> KeyResult;

    /// Commit whatever is staged and return to the empty state.
    fn flush(&mut self, sink: &mut dyn ComposingSink);

    /// Drop staged state without emitting anything.
    fn reset(&mut self);

    /// Whether a syllable is in progress.
    fn is_composing(&self) -> bool;

    /// Get a human-readable name for this composer (for debugging/logging).
    fn name(&self) -> &'static str;
}
