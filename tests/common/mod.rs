//! Shared test doubles for the integration suite.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracelog::logging::{Attr, Driver, Entry};
use tracelog::transaction::{Context, Recorder, Transaction};

/// Driver that captures entries and counts invocations.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockDriver {
    count: AtomicUsize,
    entries: Mutex<Vec<Entry>>,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn last_entry(&self) -> Entry {
        self.entries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no entry was logged")
    }
}

impl Driver for MockDriver {
    fn log(&self, _ctx: &Context, entry: Entry) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().push(entry);
    }
}

type RecordFn = dyn Fn(&Context, &str, &str) -> (Transaction, Context) + Send + Sync;

/// Recorder with a programmable mint function.
///
/// The default behavior mirrors a backend that annotates both sides: a
/// fixed "test-trace" id with name/type attrs on the transaction, and an
/// env=test value on the context.
pub struct MockRecorder {
    record_fn: Option<Box<RecordFn>>,
}

#[allow(dead_code)]
impl MockRecorder {
    pub fn new() -> Self {
        Self { record_fn: None }
    }

    pub fn with_record_fn(
        record_fn: impl Fn(&Context, &str, &str) -> (Transaction, Context) + Send + Sync + 'static,
    ) -> Self {
        Self {
            record_fn: Some(Box::new(record_fn)),
        }
    }
}

impl Recorder for MockRecorder {
    fn record_transaction(
        &self,
        ctx: &Context,
        name: &str,
        transaction_type: &str,
    ) -> (Transaction, Context) {
        if let Some(record_fn) = &self.record_fn {
            return record_fn(ctx, name, transaction_type);
        }
        let mut tx = Transaction::new("test-trace");
        tx.attrs = vec![
            Attr::new("name", name),
            Attr::new("type", transaction_type),
        ];
        (tx, ctx.with_value("env", "test"))
    }
}
