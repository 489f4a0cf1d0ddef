//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Config (validated, immutable)
//!     → setup builds driver/recorder and installs the defaults
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a fresh install
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Config, LogConfig, TransactionConfig};
pub use validation::{validate_config, ValidationError};
