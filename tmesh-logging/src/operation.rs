//! Log operation for TMesh components.

use alloc::string::String;

use crate::level::LogLevel;

/// One log message emitted by a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOperation {
    /// Log level
    pub level: LogLevel,
    /// Component tag, e.g. `TMESH_OBSERVER`
    pub component: &'static str,
    /// Log message
    pub message: String,
}

impl LogOperation {
    /// Create a new log operation
    #[must_use]
    pub const fn new(level: LogLevel, component: &'static str, message: String) -> Self {
        Self { level, component, message }
    }

    /// Create a new log operation from anything convertible to a `String`
    pub fn with_message<S: Into<String>>(
        level: LogLevel,
        component: &'static str,
        message: S,
    ) -> Self {
        Self { level, component, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_log_operation_creation() {
        let op = LogOperation::new(LogLevel::Info, "TMESH_OBSERVER", "test message".to_string());
        assert_eq!(op.level, LogLevel::Info);
        assert_eq!(op.component, "TMESH_OBSERVER");
        assert_eq!(op.message, "test message");

        let op2 = LogOperation::with_message(LogLevel::Debug, "TMESH_ARRAY", "grown");
        assert_eq!(op2.level, LogLevel::Debug);
        assert_eq!(op2.message, "grown");
    }
}
