//! Composing span contract between a composition engine and the host editor.
//!
//! The engine never reads the provisional text back. It only emits an ordered
//! stream of span operations, and the host applies them in that order. When a
//! key needs two operations the engine always emits the correcting `Replace`
//! first.

use serde::{Deserialize, Serialize};

/// One operation on the provisional (composing) span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "ch", rename_all = "snake_case")]
pub enum SpanOp {
    /// Begin a fresh provisional span showing one character
    StartNew(char),
    /// Overwrite the provisional span's character in place
    Replace(char),
    /// Commit the current span, then start a new one with the character
    AppendAsNewSpan(char),
    /// Remove the provisional span with no replacement
    Clear,
    /// Commit the provisional span with no new span started
    Commit,
}

impl SpanOp {
    /// Character carried by the operation, if any.
    pub fn char(&self) -> Option<char> {
        match *self {
            SpanOp::StartNew(ch) | SpanOp::Replace(ch) | SpanOp::AppendAsNewSpan(ch) => Some(ch),
            SpanOp::Clear | SpanOp::Commit => None,
        }
    }
}

/// Receiver of composing span operations.
///
/// Implemented by the host surface. `Vec<SpanOp>` records operations and is
/// what tests use; `Composition` additionally models the resulting document.
pub trait ComposingSink {
    fn start_new(&mut self, ch: char);

    fn replace(&mut self, ch: char);

    fn append_as_new_span(&mut self, ch: char);

    fn clear(&mut self);

    fn commit(&mut self);

    /// Apply a recorded operation.
    fn apply(&mut self, op: SpanOp) {
        match op {
            SpanOp::StartNew(ch) => self.start_new(ch),
            SpanOp::Replace(ch) => self.replace(ch),
            SpanOp::AppendAsNewSpan(ch) => self.append_as_new_span(ch),
            SpanOp::Clear => self.clear(),
            SpanOp::Commit => self.commit(),
        }
    }
}

/// Records every operation in order.
///
/// `Vec::clear` shadows `ComposingSink::clear` under method-call syntax, so
/// `ops.clear()` empties the log. Record a clear with
/// `ComposingSink::clear(&mut ops)`; the automaton always goes through
/// `&mut dyn ComposingSink` and is unaffected.
impl ComposingSink for Vec<SpanOp> {
    fn start_new(&mut self, ch: char) {
        self.push(SpanOp::StartNew(ch));
    }

    fn replace(&mut self, ch: char) {
        self.push(SpanOp::Replace(ch));
    }

    fn append_as_new_span(&mut self, ch: char) {
        self.push(SpanOp::AppendAsNewSpan(ch));
    }

    fn clear(&mut self) {
        self.push(SpanOp::Clear);
    }

    fn commit(&mut self) {
        self.push(SpanOp::Commit);
    }
}

impl<S: ComposingSink + ?Sized> ComposingSink for &mut S {
    fn start_new(&mut self, ch: char) {
        (**self).start_new(ch);
    }

    fn replace(&mut self, ch: char) {
        (**self).replace(ch);
    }

    fn append_as_new_span(&mut self, ch: char) {
        (**self).append_as_new_span(ch);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn commit(&mut self) {
        (**self).commit();
    }
}
