//! Transaction tracing and context propagation.
//!
//! # Data Flow
//! ```text
//! start_transaction(ctx, name, type, attrs)
//!     → Recorder mints Transaction (trace id, backend attrs)
//!     → caller attrs appended, start instant stamped
//!     → derived Context carries the transaction (last-wins)
//!     → Logger reads trace id + attrs from the context per entry
//!     → caller invokes end() when the unit of work finishes
//! ```
//!
//! # Design Decisions
//! - The context is an explicit parameter, never thread-local state
//! - A context without a transaction yields a zero value, not an error
//! - The context holds an immutable snapshot; the caller owns the live
//!   transaction and its end-of-work measurement

pub mod context;
pub mod tracer;
pub mod types;

pub use context::Context;
pub use tracer::{default_tracer, set_default_tracer, Recorder, Tracer};
pub use types::Transaction;
