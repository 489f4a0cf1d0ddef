//! Plain-text driver for any writable sink.

use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use serde_json::Value;

use crate::logging::{Attr, Driver, Entry};
use crate::transaction::Context;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Driver writing one human-readable line per entry.
///
/// Line shape:
/// `2024-05-03 10:30:00.000 - WARN: disk low\ttraceID=abc details=[pct='91']
/// transactionDetails=[user='42']`. The trace id and bracket groups are
/// omitted when empty.
pub struct TextDriver {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl TextDriver {
    pub fn new(output: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(output)),
        }
    }

    /// Text driver over standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl Driver for TextDriver {
    fn log(&self, _ctx: &Context, entry: Entry) {
        let mut w = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let _ = write!(
            w,
            "{} - {}: {}",
            entry.time.format(DATE_FORMAT),
            entry.level,
            entry.message
        );
        if !entry.trace_id.is_empty() {
            let _ = write!(w, "\ttraceID={}", entry.trace_id);
        }
        if !entry.attrs.is_empty() {
            let _ = write!(w, " details=[{}]", format_attrs(&entry.attrs));
        }
        if !entry.transaction_attrs.is_empty() {
            let _ = write!(
                w,
                " transactionDetails=[{}]",
                format_attrs(&entry.transaction_attrs)
            );
        }
        let _ = w.write_all(b"\n");
        let _ = w.flush();
    }
}

fn format_attrs(attrs: &[Attr]) -> String {
    attrs
        .iter()
        .map(|attr| format!("{}='{}'", attr.key, format_value(&attr.value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strings render bare inside the quotes; everything else keeps its JSON
/// rendering.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
