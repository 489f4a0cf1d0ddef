//! JSON-lines driver for any writable sink.

use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use crate::logging::{Driver, Entry};
use crate::transaction::Context;

/// Driver writing one JSON object per entry, one entry per line.
pub struct JsonDriver {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl JsonDriver {
    pub fn new(output: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(output)),
        }
    }

    /// JSON driver over standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl Driver for JsonDriver {
    fn log(&self, _ctx: &Context, entry: Entry) {
        let mut w = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if serde_json::to_writer(&mut *w, &entry).is_ok() {
            let _ = w.write_all(b"\n");
        }
        let _ = w.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Attr, Level};
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_one_parseable_object_per_line() {
        let buf = SharedBuf::default();
        let driver = JsonDriver::new(Box::new(buf.clone()));
        let entry = Entry {
            time: Utc::now(),
            message: "disk low".to_string(),
            level: Level::WARN,
            attrs: vec![Attr::new("pct", 91)],
            trace_id: "abc-123".to_string(),
            transaction_attrs: Vec::new(),
        };
        driver.log(&Context::new(), entry.clone());
        driver.log(&Context::new(), entry);

        let contents = buf.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["message"], "disk low");
        // levels serialize as their integer severity
        assert_eq!(parsed["level"], 4);
        assert_eq!(parsed["trace_id"], "abc-123");
        assert_eq!(parsed["attrs"][0]["key"], "pct");
        assert_eq!(parsed["attrs"][0]["value"], 91);
    }
}
