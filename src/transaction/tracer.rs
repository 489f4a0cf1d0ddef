//! Tracer and the recorder capability.

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use arc_swap::ArcSwap;

use crate::logging::Attr;
use crate::recorders::UuidRecorder;
use crate::transaction::context::Context;
use crate::transaction::types::Transaction;

/// Capability that mints transactions.
///
/// How trace ids are generated is entirely the recorder's concern; an
/// external trace backend plugs in here.
pub trait Recorder: Send + Sync {
    /// Produce a new transaction and a propagation context, which the
    /// recorder may enrich with its own correlation state.
    fn record_transaction(
        &self,
        ctx: &Context,
        name: &str,
        transaction_type: &str,
    ) -> (Transaction, Context);
}

/// Owner of the active recorder; starts transactions and attaches them to
/// derived contexts.
#[derive(Clone)]
pub struct Tracer {
    recorder: Arc<dyn Recorder>,
}

impl Tracer {
    pub fn new(recorder: Arc<dyn Recorder>) -> Self {
        Self { recorder }
    }

    /// Start a transaction for one logical unit of work.
    ///
    /// The recorder mints the transaction; `attrs` are appended after any
    /// recorder-provided attributes, the start instant is stamped, and the
    /// returned context carries the transaction (replacing any previously
    /// attached one).
    pub fn start_transaction(
        &self,
        ctx: &Context,
        name: &str,
        transaction_type: &str,
        attrs: &[Attr],
    ) -> (Transaction, Context) {
        let (mut tx, ctx) = self.recorder.record_transaction(ctx, name, transaction_type);
        tx.attrs.extend_from_slice(attrs);
        tx.start = Instant::now();
        let ctx = ctx.with_transaction(tx.clone());
        (tx, ctx)
    }
}

static DEFAULT_TRACER: LazyLock<ArcSwap<Tracer>> =
    LazyLock::new(|| ArcSwap::from_pointee(Tracer::new(Arc::new(UuidRecorder::new()))));

/// Replace the process-wide default tracer.
pub fn set_default_tracer(tracer: Tracer) {
    DEFAULT_TRACER.store(Arc::new(tracer));
}

/// The current process-wide default tracer.
pub fn default_tracer() -> Arc<Tracer> {
    DEFAULT_TRACER.load_full()
}
