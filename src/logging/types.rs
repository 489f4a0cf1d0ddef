//! Attribute and entry value model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::logging::level::Level;

/// A named, arbitrarily-typed piece of contextual data attached to a log
/// entry or transaction.
///
/// Attributes are order-preserving when accumulated and duplicate keys are
/// kept; rendering is entirely the driver's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One immutable, fully-formed log event.
///
/// Built once per passing-filter log call and handed to exactly one driver
/// invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub message: String,
    pub level: Level,
    /// Logger-permanent attributes followed by call-site arguments.
    pub attrs: Vec<Attr>,
    /// Empty when no transaction is in scope.
    pub trace_id: String,
    pub transaction_attrs: Vec<Attr>,
}
