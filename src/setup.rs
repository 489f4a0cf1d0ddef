//! Default-instance wiring from configuration.
//!
//! Builds the concrete driver and recorder a validated [`Config`] selects
//! and installs the resulting logger and tracer as the process-wide
//! defaults. Until something here runs, the process-start fallbacks (stdout
//! text logger at INFO, uuid-backed tracer) are in effect.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::{Config, LogConfig, TransactionConfig};
use crate::drivers::{JsonDriver, TextDriver};
use crate::logging::{set_default_logger, Attr, Driver, Level, Logger};
use crate::recorders::UuidRecorder;
use crate::transaction::{set_default_tracer, Tracer};

/// Build and atomically install the default logger and tracer from `cfg`.
pub fn install_from_config(cfg: &Config) {
    set_default_tracer(tracer_from_config(&cfg.transaction));
    set_default_logger(logger_from_config(&cfg.log));
}

/// Load `path`, validate it and install the default logger and tracer.
///
/// On failure the process-start fallbacks stay in place and the error is
/// returned for the caller to report; a missing config file need not be
/// fatal.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let cfg = load_config(path.as_ref())?;
    install_from_config(&cfg);
    Ok(())
}

/// Build a logger from `cfg` without installing it.
///
/// An unopenable output file falls back to stdout and an unparsable level
/// to INFO, each reported on stderr; a validated config hits neither path.
pub fn logger_from_config(cfg: &LogConfig) -> Logger {
    let output: Box<dyn Write + Send> = if cfg.output_file.is_empty() {
        Box::new(io::stdout())
    } else {
        match OpenOptions::new()
            .append(true)
            .create(true)
            .open(&cfg.output_file)
        {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!(
                    "open log output file {:?}: {}, falling back to stdout",
                    cfg.output_file, err
                );
                Box::new(io::stdout())
            }
        }
    };

    let driver: Arc<dyn Driver> = match cfg.processing.as_str() {
        "json" => Arc::new(JsonDriver::new(output)),
        _ => Arc::new(TextDriver::new(output)),
    };

    let mut level = Level::INFO;
    if !cfg.level.is_empty() {
        match cfg.level.parse() {
            Ok(parsed) => level = parsed,
            Err(err) => eprintln!("configured log level ignored: {}", err),
        }
    }

    let mut logger = Logger::new(driver, level);
    if !cfg.permanent_attributes.is_empty() {
        let attrs: Vec<Attr> = cfg
            .permanent_attributes
            .iter()
            .flat_map(|item| item.iter().map(|(k, v)| Attr::new(k.clone(), v.clone())))
            .collect();
        logger = logger.with_attrs(&attrs);
    }
    logger
}

/// Build a tracer from `cfg` without installing it.
pub fn tracer_from_config(_cfg: &TransactionConfig) -> Tracer {
    // "uuid" is the only built-in recorder; trace backends install their
    // own tracer through set_default_tracer
    Tracer::new(Arc::new(UuidRecorder::new()))
}
