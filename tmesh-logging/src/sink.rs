//! Log sinks for TMesh components.
//!
//! A sink is the final destination of a [`LogOperation`]. Closures work as
//! sinks directly; [`NullSink`] discards everything, [`FacadeSink`] forwards
//! to the `log` crate and [`RecordingSink`] keeps operations in memory.

#[cfg(feature = "std")]
use alloc::{string::String, vec::Vec};

use crate::operation::LogOperation;
#[cfg(feature = "std")]
use crate::level::LogLevel;

/// Destination for log operations
pub trait LogSink: Send + Sync {
    /// Handle a log operation
    fn log(&self, operation: &LogOperation);
}

impl<F> LogSink for F
where
    F: Fn(&LogOperation) + Send + Sync,
{
    fn log(&self, operation: &LogOperation) {
        self(operation);
    }
}

/// Sink that drops every operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _operation: &LogOperation) {}
}

/// Sink forwarding to the `log` facade, using the component tag as target
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacadeSink;

#[cfg(feature = "log")]
impl LogSink for FacadeSink {
    fn log(&self, operation: &LogOperation) {
        log::log!(
            target: operation.component,
            operation.level.to_log_level(),
            "{}",
            operation.message
        );
    }
}

/// Sink keeping every operation in memory
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct RecordingSink {
    operations: parking_lot::Mutex<Vec<LogOperation>>,
}

#[cfg(feature = "std")]
impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded operations, oldest first
    #[must_use]
    pub fn operations(&self) -> Vec<LogOperation> {
        self.operations.lock().clone()
    }

    /// Messages recorded at exactly `level`
    #[must_use]
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.operations
            .lock()
            .iter()
            .filter(|op| op.level == level)
            .map(|op| op.message.clone())
            .collect()
    }

    /// Whether any operation at `level` contains `needle`
    #[must_use]
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.operations
            .lock()
            .iter()
            .any(|op| op.level == level && op.message.contains(needle))
    }

    /// Number of recorded operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.lock().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.lock().is_empty()
    }

    /// Forget every recorded operation
    pub fn clear(&self) {
        self.operations.lock().clear();
    }
}

#[cfg(feature = "std")]
impl LogSink for RecordingSink {
    fn log(&self, operation: &LogOperation) {
        self.operations.lock().push(operation.clone());
    }
}
