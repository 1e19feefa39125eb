// TMesh - tmesh-error
// Module: TMesh Error Types
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling system for TMesh
///
/// Categories, the `Error` value type and the constructors used across the
/// workspace.
use core::fmt;

use crate::codes;

/// `Error` categories for TMesh operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Parameter errors (invalid arguments, foreign handles)
    Parameter  = 1,
    /// Memory errors (allocation failures)
    Memory     = 2,
    /// Capacity errors (configured limits reached)
    Capacity   = 3,
    /// Resource errors (missing observers)
    Resource   = 4,
    /// Validation errors (rejected configuration)
    Validation = 5,
    /// Unknown errors
    Unknown    = 9,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// TMesh `Error` type
///
/// Categorized error with a numeric code and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a resource error
    #[must_use]
    pub fn is_resource_error(&self) -> bool {
        self.category == ErrorCategory::Resource
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Create a foreign observer handle error
    #[must_use]
    pub const fn foreign_observer_handle(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Parameter,
            codes::FOREIGN_OBSERVER_HANDLE,
            message,
        )
    }

    /// Create an allocation failed error
    #[must_use]
    pub const fn allocation_failed(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::ALLOCATION_FAILED, message)
    }

    /// Create a capacity overflow error
    #[must_use]
    pub const fn capacity_overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::CAPACITY_OVERFLOW, message)
    }

    /// Create an array capacity exceeded error
    #[must_use]
    pub const fn array_capacity_exceeded(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            codes::ARRAY_CAPACITY_EXCEEDED,
            message,
        )
    }

    /// Create an observer limit exceeded error
    #[must_use]
    pub const fn observer_limit_exceeded(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            codes::OBSERVER_LIMIT_EXCEEDED,
            message,
        )
    }

    /// Create an observer not found error
    #[must_use]
    pub const fn observer_not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Resource, codes::OBSERVER_NOT_FOUND, message)
    }

    /// Create a no observers error
    #[must_use]
    pub const fn no_observers(message: &'static str) -> Self {
        Self::new(ErrorCategory::Resource, codes::NO_OBSERVERS, message)
    }

    /// Create a configuration error
    #[must_use]
    pub const fn invalid_configuration(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Validation,
            codes::INVALID_CONFIGURATION,
            message,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
