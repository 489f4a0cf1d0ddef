//! Concrete transaction recorders.
//!
//! A recorder is the minting end of tracing: it decides what a trace id
//! looks like and may enrich the propagation context with backend state.
//! External trace backends implement [`Recorder`](crate::transaction::Recorder)
//! themselves; the built-in recorder just provides opaque identities.

pub mod uuid;

pub use self::uuid::UuidRecorder;
