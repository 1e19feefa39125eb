//! Log level definitions for TMesh components.

use core::{fmt, str::FromStr};

/// Log levels for component diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Trace-level messages (detailed debugging information)
    Trace,
    /// Debug-level messages (useful for developers)
    Debug,
    /// Informational messages (general runtime information)
    Info,
    /// Warning messages (potential issues)
    Warn,
    /// Error messages (recoverable errors)
    Error,
    /// Critical error messages (severe issues)
    Critical,
}

/// Custom error for parsing log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLogLevelError {
    /// Static error message
    pub message: &'static str,
}

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid log level: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("err") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("critical") || s.eq_ignore_ascii_case("fatal") {
            Ok(Self::Critical)
        } else {
            Err(ParseLogLevelError { message: "unrecognized level name" })
        }
    }
}

impl LogLevel {
    /// Creates a `LogLevel` from a string, defaulting to Info for invalid
    /// levels
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Info)
    }

    /// Convert `LogLevel` to a string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Map onto the `log` facade. `Critical` has no facade counterpart and
    /// is reported as `Error`.
    #[cfg(feature = "log")]
    #[must_use]
    pub const fn to_log_level(&self) -> log::Level {
        match self {
            Self::Trace => log::Level::Trace,
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Critical => log::Level::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
