//! Registration limits for subjects.

use tmesh_error::{Error, Result};

/// Bounds applied to a [`Subject`](crate::Subject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectLimits {
    /// Most observers registered at once
    pub max_observers: usize,
}

impl SubjectLimits {
    /// No limit beyond available memory
    pub const UNBOUNDED: Self = Self { max_observers: usize::MAX };

    /// Limits for embedded platforms
    #[must_use]
    pub const fn embedded() -> Self {
        Self { max_observers: 16 }
    }

    /// Validate limits are reasonable
    ///
    /// # Errors
    ///
    /// Returns a validation error if `max_observers` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_observers == 0 {
            return Err(Error::invalid_configuration("max_observers cannot be zero"));
        }
        Ok(())
    }
}

impl Default for SubjectLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
