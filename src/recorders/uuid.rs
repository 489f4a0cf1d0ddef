//! Fallback recorder minting opaque trace ids.

use uuid::Uuid;

use crate::transaction::{Context, Recorder, Transaction};

/// Recorder that mints a random v4 uuid as the trace id and passes the
/// context through untouched. Backs the default tracer until a real trace
/// backend is installed.
#[derive(Debug, Default)]
pub struct UuidRecorder;

impl UuidRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl Recorder for UuidRecorder {
    fn record_transaction(
        &self,
        ctx: &Context,
        _name: &str,
        _transaction_type: &str,
    ) -> (Transaction, Context) {
        (Transaction::new(Uuid::new_v4().to_string()), ctx.clone())
    }
}
