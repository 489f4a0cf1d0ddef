//! Transaction lifecycle and context propagation tests.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde_json::Value;
use tracelog::logging::Attr;
use tracelog::transaction::{Context, Tracer};

mod common;

fn mock_tracer() -> Tracer {
    Tracer::new(Arc::new(common::MockRecorder::new()))
}

#[test]
fn test_context_without_transaction_yields_zero_value() {
    let ctx = Context::new();
    let tx = ctx.transaction();
    assert_eq!(tx.trace_id, "");
    assert!(tx.attrs.is_empty());
    assert_eq!(tx.duration(), Duration::ZERO);
}

#[test]
fn test_returned_context_matches_returned_transaction() {
    let (tx, ctx) = mock_tracer().start_transaction(
        &Context::new(),
        "checkout",
        "request",
        &[Attr::new("user", "42")],
    );

    let attached = ctx.transaction();
    assert_eq!(attached.trace_id, tx.trace_id);
    assert_eq!(attached.attrs, tx.attrs);
    // recorder-minted attrs come first, caller attrs after
    assert_eq!(
        tx.attrs,
        vec![
            Attr::new("name", "checkout"),
            Attr::new("type", "request"),
            Attr::new("user", "42"),
        ]
    );
}

#[test]
fn test_recorder_can_enrich_the_context() {
    let (_tx, ctx) = mock_tracer().start_transaction(&Context::new(), "checkout", "request", &[]);
    assert_eq!(ctx.value("env"), Some(&Value::from("test")));
}

#[test]
fn test_end_measures_a_positive_duration() {
    let (mut tx, _ctx) =
        mock_tracer().start_transaction(&Context::new(), "checkout", "request", &[]);
    thread::sleep(Duration::from_millis(5));
    tx.end();
    assert!(tx.duration() > Duration::ZERO);
}

#[test]
fn test_ending_the_caller_copy_leaves_the_context_snapshot_alone() {
    let (mut tx, ctx) =
        mock_tracer().start_transaction(&Context::new(), "checkout", "request", &[]);
    thread::sleep(Duration::from_millis(2));
    tx.end();

    assert!(tx.duration() > Duration::ZERO);
    assert_eq!(ctx.transaction().duration(), Duration::ZERO);
}

#[test]
fn test_nested_transactions_override_in_derived_context() {
    let tracer = mock_tracer();
    let (_outer, outer_ctx) =
        tracer.start_transaction(&Context::new(), "outer", "request", &[]);

    let inner_tracer = Tracer::new(Arc::new(common::MockRecorder::with_record_fn(
        |ctx, _name, _type| {
            (
                tracelog::transaction::Transaction::new("inner-trace"),
                ctx.clone(),
            )
        },
    )));
    let (_inner, inner_ctx) = inner_tracer.start_transaction(&outer_ctx, "inner", "job", &[]);

    assert_eq!(inner_ctx.transaction().trace_id, "inner-trace");
    // the outer context still sees its own transaction
    assert_eq!(outer_ctx.transaction().trace_id, "test-trace");
}
