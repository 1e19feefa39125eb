//! Prelude module for tmesh
//!
//! Re-exports the types most callers need, for both std and no_std
//! environments.

pub use tmesh_error::{Error, ErrorCategory, Result};
pub use tmesh_foundation::{DynArray, GrowthPolicy, PushError};
pub use tmesh_logging::{LogLevel, Logger};
pub use tmesh_observer::{Observer, ObserverHandle, Subject, SubjectLimits};
