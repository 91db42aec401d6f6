//! Tests for the composing span contract as a host would consume it.

use libkorean_core::{ComposingSink, Composition, SpanOp};

fn recorded() -> Vec<SpanOp> {
    vec![
        SpanOp::StartNew('ㄱ'),
        SpanOp::Replace('가'),
        SpanOp::Replace('갓'),
        SpanOp::Replace('가'),
        SpanOp::AppendAsNewSpan('사'),
        SpanOp::Commit,
        SpanOp::StartNew('ㅎ'),
        SpanOp::Clear,
    ]
}

#[test]
fn test_replay_into_composition() {
    let mut doc = Composition::new();
    for op in recorded() {
        doc.apply(op);
    }
    assert_eq!(doc.committed, "가사");
    assert!(!doc.is_composing());
    assert_eq!(doc.ops, recorded());
}

#[test]
fn test_op_log_json_round_trip() {
    let json = serde_json::to_string(&recorded()).unwrap();
    let parsed: Vec<SpanOp> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, recorded());
}

#[test]
fn test_sink_through_mutable_reference() {
    fn drive(mut sink: impl ComposingSink) {
        sink.start_new('ㅏ');
        sink.commit();
    }

    let mut ops: Vec<SpanOp> = Vec::new();
    drive(&mut ops);
    assert_eq!(ops, vec![SpanOp::StartNew('ㅏ'), SpanOp::Commit]);
}

#[test]
fn test_host_default_actions_interleave() {
    let mut doc = Composition::new();
    doc.start_new('하');
    doc.insert_char(' ');
    doc.start_new('ㄱ');
    assert_eq!(doc.text(), "하 ㄱ");

    doc.clear();
    assert!(doc.delete_before());
    assert_eq!(doc.text(), "하");
}
