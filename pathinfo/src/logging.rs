//! Logging infrastructure for the pathinfo library.
//!
//! A small stderr-based logger with three verbosity levels, configurable
//! from CLI flags or the `PATHINFO_LOG_MODE` environment variable.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Logging level for controlling output verbosity.
///
/// Levels are ordered from least verbose (`Quiet`) to most verbose
/// (`Verbose`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Recognizes "quiet", "normal", and "verbose" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// Only messages at or above the configured level are written.
///
/// # Examples
///
/// ```
/// use pathinfo::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("working directory changed between calls");
/// logger.debug("not printed at Normal level");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message. Suppressed only at `Quiet` level.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message. Suppressed only at `Quiet` level.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message. Displayed only at `Verbose` level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message. Displayed only at `Verbose` level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` / `quiet`, verbose wins if both are set)
/// 2. `PATHINFO_LOG_MODE` environment variable
/// 3. Default (`Normal`)
///
/// # Examples
///
/// ```
/// use pathinfo::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("PATHINFO_LOG_MODE") {
        if let Ok(level) = env_value.parse() {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
