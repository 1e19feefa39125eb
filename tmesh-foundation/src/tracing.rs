//! Tracing support for TMesh collections
//!
//! Wraps the `tracing` crate for structured events around buffer growth.
//! Works in both std and `no_std` + alloc builds.

pub use tracing::{trace_span, Span};

/// Trace events for array buffer management
#[derive(Debug, Clone)]
pub struct ArrayTrace;

impl ArrayTrace {
    /// Create a span for a buffer growth step
    #[inline]
    #[must_use]
    pub fn growing(from: usize, to: usize) -> Span {
        trace_span!("dyn_array_grow", from = %from, to = %to)
    }
}
