//! Log severity levels.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Severity of a log event.
///
/// Levels are plain integers with four named thresholds. Any integer is a
/// valid level; filtering compares the underlying value, so custom levels
/// slot between the named ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Level::DEBUG => f.write_str("DEBUG"),
            Level::INFO => f.write_str("INFO"),
            Level::WARN => f.write_str("WARN"),
            Level::ERROR => f.write_str("ERROR"),
            Level(n) => write!(f, "LEVEL({})", n),
        }
    }
}

/// Error returned when a string matches neither a named level nor the
/// `LEVEL(n)` round-trip form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparsable level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive on the four names and on the `LEVEL` token of the
    /// `LEVEL(n)` round-trip form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "DEBUG" => return Ok(Level::DEBUG),
            "INFO" => return Ok(Level::INFO),
            "WARN" => return Ok(Level::WARN),
            "ERROR" => return Ok(Level::ERROR),
            _ => {}
        }
        upper
            .strip_prefix("LEVEL(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|n| n.parse::<i32>().ok())
            .map(Level)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
