//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the logging
//! pipeline. All types derive Serde traits for deserialization from config
//! files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Logger configuration (level, driver, permanent attributes).
    pub log: LogConfig,

    /// Transaction tracing configuration.
    pub transaction: TransactionConfig,
}

/// Logger configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level name (e.g. "info", "LEVEL(2)"). Empty means INFO.
    pub level: String,

    /// Output driver selector: "text" (default) or "json".
    pub processing: String,

    /// Output file path, opened append-create. Empty logs to stdout.
    pub output_file: String,

    /// Attributes attached to every entry, in listed order.
    pub permanent_attributes: Vec<BTreeMap<String, String>>,
}

/// Transaction tracing configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionConfig {
    /// Recorder selector backing the default tracer: "uuid" (default).
    pub recorder: String,
}
