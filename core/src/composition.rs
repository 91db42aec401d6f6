//! Host-side model of the document being edited.
//!
//! `Composition` applies span operations the way a platform text field
//! would: committed text is permanent, the preedit holds the single
//! provisional character. It also simulates the host's default handling of
//! keys the IME passes through (inserting a character, deleting committed
//! text), which makes it the sink used by the CLI and integration tests.

use crate::sink::{ComposingSink, SpanOp};

/// Committed text plus the current provisional span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    /// Text already committed to the document
    pub committed: String,
    /// The provisional text to display (at most one character)
    pub preedit: String,
    /// Every operation applied, in order
    pub ops: Vec<SpanOp>,
}

impl Composition {
    /// Create a new empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether there is a provisional span.
    pub fn is_composing(&self) -> bool {
        !self.preedit.is_empty()
    }

    /// Committed text followed by the provisional span.
    pub fn text(&self) -> String {
        let mut text = self.committed.clone();
        text.push_str(&self.preedit);
        text
    }

    /// Insert a character as committed text (host default for passthrough keys).
    pub fn insert_char(&mut self, ch: char) {
        self.finish_composing();
        self.committed.push(ch);
    }

    /// Delete the committed character before the cursor (host default backspace).
    /// Returns true if a character was deleted.
    pub fn delete_before(&mut self) -> bool {
        self.committed.pop().is_some()
    }

    /// Drain the operation log.
    pub fn take_ops(&mut self) -> Vec<SpanOp> {
        std::mem::take(&mut self.ops)
    }

    fn finish_composing(&mut self) {
        let preedit = std::mem::take(&mut self.preedit);
        self.committed.push_str(&preedit);
    }

    fn set_preedit(&mut self, ch: char) {
        self.preedit.clear();
        self.preedit.push(ch);
    }
}

impl ComposingSink for Composition {
    fn start_new(&mut self, ch: char) {
        tracing::trace!(%ch, "span start_new");
        if self.is_composing() {
            tracing::warn!(preedit = %self.preedit, "start_new over a live span; committing it");
            self.finish_composing();
        }
        self.set_preedit(ch);
        self.ops.push(SpanOp::StartNew(ch));
    }

    fn replace(&mut self, ch: char) {
        tracing::trace!(%ch, "span replace");
        self.set_preedit(ch);
        self.ops.push(SpanOp::Replace(ch));
    }

    fn append_as_new_span(&mut self, ch: char) {
        tracing::trace!(%ch, "span append_as_new_span");
        self.finish_composing();
        self.set_preedit(ch);
        self.ops.push(SpanOp::AppendAsNewSpan(ch));
    }

    fn clear(&mut self) {
        tracing::trace!("span clear");
        self.preedit.clear();
        self.ops.push(SpanOp::Clear);
    }

    fn commit(&mut self) {
        tracing::trace!("span commit");
        self.finish_composing();
        self.ops.push(SpanOp::Commit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let comp = Composition::new();
        assert!(!comp.is_composing());
        assert!(comp.committed.is_empty());
        assert!(comp.ops.is_empty());
    }

    #[test]
    fn test_replace_in_place() {
        let mut comp = Composition::new();
        comp.start_new('ㅎ');
        comp.replace('하');
        comp.replace('한');

        assert_eq!(comp.preedit, "한");
        assert!(comp.committed.is_empty());
        assert_eq!(comp.ops.len(), 3);
    }

    #[test]
    fn test_append_commits_previous_span() {
        let mut comp = Composition::new();
        comp.start_new('가');
        comp.replace('갓');
        comp.replace('가');
        comp.append_as_new_span('사');

        assert_eq!(comp.committed, "가");
        assert_eq!(comp.preedit, "사");
        assert_eq!(comp.text(), "가사");
    }

    #[test]
    fn test_clear_drops_preedit_only() {
        let mut comp = Composition::new();
        comp.insert_char('a');
        comp.start_new('ㄱ');
        comp.clear();

        assert_eq!(comp.committed, "a");
        assert!(!comp.is_composing());
    }

    #[test]
    fn test_commit() {
        let mut comp = Composition::new();
        comp.start_new('한');
        comp.commit();
        comp.start_new('ㄱ');

        assert_eq!(comp.committed, "한");
        assert_eq!(comp.preedit, "ㄱ");
    }

    #[test]
    fn test_insert_char_finishes_composing() {
        let mut comp = Composition::new();
        comp.start_new('글');
        comp.insert_char(' ');
        assert_eq!(comp.committed, "글 ");
        assert!(!comp.is_composing());
    }

    #[test]
    fn test_delete_before() {
        let mut comp = Composition::new();
        assert!(!comp.delete_before());

        comp.insert_char('한');
        comp.insert_char('글');
        assert!(comp.delete_before());
        assert_eq!(comp.committed, "한");
    }

    #[test]
    fn test_take_ops() {
        let mut comp = Composition::new();
        comp.start_new('ㅏ');
        comp.commit();

        let ops = comp.take_ops();
        assert_eq!(ops, vec![SpanOp::StartNew('ㅏ'), SpanOp::Commit]);
        assert!(comp.ops.is_empty());
        assert_eq!(comp.committed, "ㅏ");
    }
}
