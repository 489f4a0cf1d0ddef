//! Level-filtered logger and the driver capability.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use chrono::Utc;
use serde_json::Value;

use crate::drivers::TextDriver;
use crate::logging::level::{Level, ParseLevelError};
use crate::logging::types::{Attr, Entry};
use crate::transaction::Context;

/// Key used for call-site arguments that cannot be paired with a string key.
const UNDEF_KEY: &str = "undefKey";

/// Capability that persists/emits a finished entry.
///
/// Emission is fire-and-forget from the logger's perspective; write failures
/// stay inside the driver.
pub trait Driver: Send + Sync {
    fn log(&self, ctx: &Context, entry: Entry);
}

/// Level-filtered logger with permanent attributes and a shared driver.
///
/// Loggers are immutable once built; derivation via [`with_attrs`](Logger::with_attrs)
/// and [`with_level`](Logger::with_level) produces a new logger sharing the
/// same driver. Concurrent `log` calls on one logger are safe.
#[derive(Clone)]
pub struct Logger {
    driver: Arc<dyn Driver>,
    level: Level,
    attrs: Vec<Attr>,
}

impl Logger {
    pub fn new(driver: Arc<dyn Driver>, level: Level) -> Self {
        Self {
            driver,
            level,
            attrs: Vec::new(),
        }
    }

    /// Minimum level this logger emits at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Permanent attributes attached to every entry.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Logger sharing this driver with `attrs` appended to the permanent
    /// set. The receiver's own attributes are left untouched.
    pub fn with_attrs(&self, attrs: &[Attr]) -> Logger {
        let mut clone = self.clone();
        clone.attrs.extend_from_slice(attrs);
        clone
    }

    /// Logger sharing this driver with the minimum level parsed from
    /// `level`. On parse failure no logger is produced and the receiver is
    /// unaffected.
    pub fn with_level(&self, level: &str) -> Result<Logger, ParseLevelError> {
        let level = level.parse()?;
        let mut clone = self.clone();
        clone.level = level;
        Ok(clone)
    }

    /// Emit one entry if `level` passes the filter.
    ///
    /// `args` are interpreted as alternating key/value pairs: a string value
    /// followed by another value forms an attribute and consumes both slots.
    /// A trailing value, or a non-string where a key was expected, becomes a
    /// standalone `undefKey` attribute consuming its single slot, so no
    /// argument is ever silently dropped.
    pub fn log(&self, ctx: &Context, level: Level, msg: &str, args: &[Value]) {
        if level < self.level {
            return;
        }
        let mut attrs = self.attrs.clone();
        append_args(&mut attrs, args);
        self.dispatch(ctx, level, msg, attrs);
    }

    /// Emit one entry with pre-built attributes, skipping argument parsing.
    pub fn log_attrs(&self, ctx: &Context, level: Level, msg: &str, extra: &[Attr]) {
        if level < self.level {
            return;
        }
        let mut attrs = self.attrs.clone();
        attrs.extend_from_slice(extra);
        self.dispatch(ctx, level, msg, attrs);
    }

    fn dispatch(&self, ctx: &Context, level: Level, msg: &str, attrs: Vec<Attr>) {
        let tx = ctx.transaction();
        let entry = Entry {
            time: Utc::now(),
            message: msg.to_string(),
            level,
            attrs,
            trace_id: tx.trace_id.clone(),
            transaction_attrs: tx.attrs.clone(),
        };
        self.driver.log(ctx, entry);
    }

    pub fn debug(&self, ctx: &Context, msg: &str, args: &[Value]) {
        self.log(ctx, Level::DEBUG, msg, args);
    }

    pub fn info(&self, ctx: &Context, msg: &str, args: &[Value]) {
        self.log(ctx, Level::INFO, msg, args);
    }

    pub fn warn(&self, ctx: &Context, msg: &str, args: &[Value]) {
        self.log(ctx, Level::WARN, msg, args);
    }

    pub fn error(&self, ctx: &Context, msg: &str, args: &[Value]) {
        self.log(ctx, Level::ERROR, msg, args);
    }
}

/// Two-at-a-time walk over the loosely-typed argument list.
fn append_args(attrs: &mut Vec<Attr>, args: &[Value]) {
    let mut i = 0;
    while i < args.len() {
        match &args[i] {
            Value::String(key) if i + 1 < args.len() => {
                attrs.push(Attr::new(key.clone(), args[i + 1].clone()));
                i += 2;
            }
            arg => {
                attrs.push(Attr::new(UNDEF_KEY, arg.clone()));
                i += 1;
            }
        }
    }
}

static DEFAULT_LOGGER: LazyLock<ArcSwap<Logger>> = LazyLock::new(|| {
    // Safe process-start fallback until configuration installs a real one.
    ArcSwap::from_pointee(Logger::new(Arc::new(TextDriver::stdout()), Level::INFO))
});

/// Replace the process-wide default logger.
///
/// The swap is atomic: concurrent readers observe either the old or the new
/// logger, never a partially-updated one.
pub fn set_default_logger(logger: Logger) {
    DEFAULT_LOGGER.store(Arc::new(logger));
}

/// The current process-wide default logger.
pub fn default_logger() -> Arc<Logger> {
    DEFAULT_LOGGER.load_full()
}

/// Log through the default logger at DEBUG.
pub fn debug(ctx: &Context, msg: &str, args: &[Value]) {
    DEFAULT_LOGGER.load().log(ctx, Level::DEBUG, msg, args);
}

/// Log through the default logger at INFO.
pub fn info(ctx: &Context, msg: &str, args: &[Value]) {
    DEFAULT_LOGGER.load().log(ctx, Level::INFO, msg, args);
}

/// Log through the default logger at WARN.
pub fn warn(ctx: &Context, msg: &str, args: &[Value]) {
    DEFAULT_LOGGER.load().log(ctx, Level::WARN, msg, args);
}

/// Log through the default logger at ERROR.
pub fn error(ctx: &Context, msg: &str, args: &[Value]) {
    DEFAULT_LOGGER.load().log(ctx, Level::ERROR, msg, args);
}
