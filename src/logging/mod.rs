//! Leveled, attribute-carrying logging pipeline.
//!
//! # Data Flow
//! ```text
//! log(ctx, level, msg, args)
//!     → level filter (the single gate)
//!     → permanent attrs copied, call-site args parsed into attrs
//!     → trace id + transaction attrs merged from the context
//!     → finished Entry handed synchronously to the Driver
//! ```
//!
//! # Design Decisions
//! - Filtering happens before any allocation of consequence
//! - Attribute order is preserved and duplicate keys are kept
//! - Malformed argument pairs degrade to "undefKey" attrs, never dropped
//! - The default logger is an atomically swappable process-wide cell

pub mod level;
pub mod logger;
pub mod types;

pub use level::{Level, ParseLevelError};
pub use logger::{
    debug, default_logger, error, info, set_default_logger, warn, Driver, Logger,
};
pub use types::{Attr, Entry};
