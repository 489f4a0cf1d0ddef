//! Transaction record type.

use std::time::{Duration, Instant};

use crate::logging::Attr;

/// A correlation record spanning one logical unit of work.
///
/// Minted by a [`Recorder`](crate::transaction::Recorder), carried through a
/// [`Context`](crate::transaction::Context) and owned by the caller until it
/// goes out of scope.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Opaque identity correlating log entries to this transaction.
    pub trace_id: String,
    /// Recorder-provided attributes first, caller-supplied ones after.
    pub attrs: Vec<Attr>,
    pub(crate) start: Instant,
    duration: Duration,
}

impl Transaction {
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            attrs: Vec::new(),
            start: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Mark the transaction finished, measuring duration from its start.
    ///
    /// Calling again is not an error; the duration is simply recomputed from
    /// the original start.
    pub fn end(&mut self) {
        self.duration = self.start.elapsed();
    }

    /// Measured duration; zero until [`end`](Self::end) is called.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new("")
    }
}
