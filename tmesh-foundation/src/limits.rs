//! Growth limits for foundation collections.
//!
//! The default profile doubles from 4 slots with no upper bound. The
//! `embedded-small` feature switches [`GrowthPolicy::platform`] to a capped
//! profile for MCU targets.

use tmesh_error::{Error, Result};

/// First allocation size for an empty array
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Multiplier applied on every growth step
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Platform profile for embedded microcontrollers (~64KB RAM)
pub mod embedded {
    /// Largest slot count a single array may reach
    pub const MAX_ARRAY_CAPACITY: usize = 1024;
}

/// How a [`DynArray`](crate::collections::DynArray) grows when full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation
    pub initial_capacity: usize,
    /// Multiplier applied to the current capacity on each growth
    pub growth_factor: usize,
    /// Hard upper bound on capacity
    pub max_capacity: usize,
}

impl GrowthPolicy {
    /// Doubling from 4, unbounded
    pub const DEFAULT: Self = Self {
        initial_capacity: DEFAULT_INITIAL_CAPACITY,
        growth_factor: DEFAULT_GROWTH_FACTOR,
        max_capacity: usize::MAX,
    };

    /// Doubling from 4, capped for small embedded targets
    #[must_use]
    pub const fn embedded() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_capacity: embedded::MAX_ARRAY_CAPACITY,
        }
    }

    /// Profile selected by the platform feature flags
    #[must_use]
    pub const fn platform() -> Self {
        #[cfg(feature = "embedded-small")]
        {
            Self::embedded()
        }
        #[cfg(not(feature = "embedded-small"))]
        {
            Self::DEFAULT
        }
    }

    /// Same policy with a different upper bound
    #[must_use]
    pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Validate the policy is usable
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero initial capacity, a growth
    /// factor below 2, or a maximum smaller than the initial capacity.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::invalid_configuration("initial_capacity cannot be zero"));
        }
        if self.growth_factor < 2 {
            return Err(Error::invalid_configuration("growth_factor must be at least 2"));
        }
        if self.max_capacity < self.initial_capacity {
            return Err(Error::invalid_configuration(
                "max_capacity cannot be below initial_capacity",
            ));
        }
        Ok(())
    }

    /// Capacity following `current` under this policy
    ///
    /// Always strictly greater than `current` on success.
    ///
    /// # Errors
    ///
    /// Returns a capacity error once `current` has reached `max_capacity`.
    pub fn next_capacity(&self, current: usize) -> Result<usize> {
        if current >= self.max_capacity {
            return Err(Error::array_capacity_exceeded(
                "DynArray reached its maximum capacity",
            ));
        }
        let grown = if current == 0 {
            self.initial_capacity
        } else {
            current.saturating_mul(self.growth_factor)
        };
        Ok(grown.max(self.initial_capacity).min(self.max_capacity))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
