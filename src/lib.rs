//! Structured logging with transaction correlation.
//!
//! Application code emits leveled log entries enriched with key/value
//! attributes; a lightweight tracer correlates those entries with the
//! request- or operation-scoped transaction carried by an explicit context.
//!
//! # Architecture Overview
//!
//! ```text
//!   start_transaction(ctx, name, type)   ┌────────────────────────────┐
//!   ────────────────────────────────────▶│          Tracer            │
//!                                        │  Recorder mints trace id   │
//!                                        │  start instant stamped     │
//!                                        └─────────────┬──────────────┘
//!                                                      │ Context{Transaction}
//!                                                      ▼
//!   log(ctx, level, msg, args)           ┌────────────────────────────┐
//!   ────────────────────────────────────▶│          Logger            │
//!                                        │  level filter              │
//!                                        │  permanent attrs + args    │
//!                                        │  trace id + tx attrs merge │
//!                                        └─────────────┬──────────────┘
//!                                                      │ Entry
//!                                                      ▼
//!                                        ┌────────────────────────────┐
//!                                        │    Driver (text / json)    │
//!                                        └────────────────────────────┘
//! ```
//!
//! The default logger and tracer are process-wide, atomically swappable
//! cells; [`setup`] installs them from a validated [`Config`].

// Core pipeline
pub mod logging;
pub mod transaction;

// Pluggable capabilities
pub mod drivers;
pub mod recorders;

// Cross-cutting concerns
pub mod config;
pub mod setup;

pub use config::Config;
pub use logging::{Attr, Driver, Entry, Level, Logger};
pub use transaction::{Context, Recorder, Tracer, Transaction};
