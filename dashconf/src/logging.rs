//! Logging infrastructure for the dashconf library.
//!
//! Library code logs through the `log` facade. This module provides a simple
//! stderr backend with three verbosity levels that hosts without their own
//! logger can install.

use std::env;
use std::fmt;

/// Environment variable read by [`init_logger`].
pub const LOG_MODE_ENV: &str = "DASHCONF_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use dashconf::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
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

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashconf::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level shown at this setting.
    #[must_use]
    pub fn max_level(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use dashconf::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.shows(log::Level::Warn));
/// assert!(!logger.shows(log::Level::Debug));
/// ```
#[derive(Debug)]
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

    /// Whether records at `level` are written.
    #[must_use]
    pub fn shows(&self, level: log::Level) -> bool {
        level <= self.level.max_level()
    }

    /// Installs this logger as the `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger was already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max = self.level.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.shows(metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `DASHCONF_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use dashconf::{init_logger, LogLevel};
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

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_shows_by_level() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.shows(log::Level::Error));

        let normal = Logger::default();
        assert!(normal.shows(log::Level::Error));
        assert!(normal.shows(log::Level::Warn));
        assert!(!normal.shows(log::Level::Info));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.shows(log::Level::Debug));
        assert!(!verbose.shows(log::Level::Trace));
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let saved_env = env::var(LOG_MODE_ENV).ok();

        env::set_var(LOG_MODE_ENV, "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var(LOG_MODE_ENV, "invalid");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        env::set_var(LOG_MODE_ENV, "normal");
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);

        env::remove_var(LOG_MODE_ENV);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        if let Some(val) = saved_env {
            env::set_var(LOG_MODE_ENV, val);
        }
    }
}
