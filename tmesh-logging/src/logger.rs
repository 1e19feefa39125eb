//! Component-scoped logger.

use alloc::{format, string::String, sync::Arc};
use core::fmt;

use tmesh_error::Error;

use crate::{
    level::LogLevel,
    operation::LogOperation,
    sink::{LogSink, NullSink},
};

/// Logger bound to one component tag
///
/// Cloning is cheap: clones share the same sink.
#[derive(Clone)]
pub struct Logger {
    component: &'static str,
    sink: Arc<dyn LogSink>,
    min_level: LogLevel,
    muted: bool,
}

impl Logger {
    /// Create a logger for `component` writing to a shared sink
    #[must_use]
    pub fn new(component: &'static str, sink: Arc<dyn LogSink>) -> Self {
        Self { component, sink, min_level: LogLevel::Trace, muted: false }
    }

    /// Create a logger owning `sink`
    pub fn from_sink<S: LogSink + 'static>(component: &'static str, sink: S) -> Self {
        Self::new(component, Arc::new(sink))
    }

    /// Logger that discards everything
    #[must_use]
    pub fn silent(component: &'static str) -> Self {
        let mut logger = Self::from_sink(component, NullSink);
        logger.muted = true;
        logger
    }

    /// Logger forwarding to the `log` facade
    #[cfg(feature = "log")]
    #[must_use]
    pub fn facade(component: &'static str) -> Self {
        Self::from_sink(component, crate::sink::FacadeSink)
    }

    /// Default logger for a component: the `log` facade when available,
    /// otherwise silent
    #[must_use]
    pub fn for_component(component: &'static str) -> Self {
        #[cfg(feature = "log")]
        {
            Self::facade(component)
        }
        #[cfg(not(feature = "log"))]
        {
            Self::silent(component)
        }
    }

    /// Drop operations below `level`
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Component tag attached to every operation
    #[must_use]
    pub const fn component(&self) -> &'static str {
        self.component
    }

    /// Lowest level that reaches the sink
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether an operation at `level` reaches the sink
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.muted && level >= self.min_level
    }

    /// Emit a message at `level`
    pub fn log<S: Into<String>>(&self, level: LogLevel, message: S) {
        if !self.enabled(level) {
            return;
        }
        self.sink.log(&LogOperation::new(level, self.component, message.into()));
    }

    /// Emit pre-formatted arguments at `level`
    ///
    /// `args` is only rendered into a `String` when `level` is enabled.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.log(level, alloc::fmt::format(args));
        }
    }

    /// Emit `error` at error level, prefixed with `context`
    pub fn log_error(&self, context: &str, error: &Error) {
        if self.enabled(LogLevel::Error) {
            self.log(LogLevel::Error, format!("{context}: {error}"));
        }
    }

    /// Emit at error level
    pub fn error<S: Into<String>>(&self, message: S) {
        self.log(LogLevel::Error, message);
    }

    /// Emit at warn level
    pub fn warn<S: Into<String>>(&self, message: S) {
        self.log(LogLevel::Warn, message);
    }

    /// Emit at info level
    pub fn info<S: Into<String>>(&self, message: S) {
        self.log(LogLevel::Info, message);
    }

    /// Emit at debug level
    pub fn debug<S: Into<String>>(&self, message: S) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit at trace level
    pub fn trace<S: Into<String>>(&self, message: S) {
        self.log(LogLevel::Trace, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
