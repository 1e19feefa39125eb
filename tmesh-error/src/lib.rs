// TMesh - tmesh-error
// Module: TMesh Error Handling
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! TMesh error handling library
//!
//! Shared error type for the TMesh firmware primitives. Every fallible
//! operation in the workspace returns [`Result`], and every error carries a
//! category, a numeric code and a static message so it can be reported on
//! targets without an allocator.
//!
//! # Error Categories
//!
//! ## Parameter Errors (1000-1999)
//! - Invalid arguments
//! - Handles that belong to another subject
//!
//! ## Memory Errors (2000-2999)
//! - Allocation failures while growing a buffer
//! - Capacity arithmetic overflow
//!
//! ## Capacity Errors (3000-3999)
//! - Configured array or observer limits reached
//!
//! ## Resource Errors (4000-4999)
//! - Observers that are not registered
//!
//! ## Validation Errors (5000-5999)
//! - Rejected configuration values
//!
//! # Usage
//!
//! ```
//! use tmesh_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Resource,
//!     codes::OBSERVER_NOT_FOUND,
//!     "Observer not registered with subject",
//! );
//! assert!(error.is_resource_error());
//!
//! let alloc = Error::allocation_failed("DynArray growth failed");
//! assert_eq!(alloc.code, codes::ALLOCATION_FAILED);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for tmesh
pub mod codes;
/// Error and error handling types
pub mod errors;
pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for TMesh operations.
///
/// Usable in `no_std` environments since [`Error`] holds only static data.
pub type Result<T> = core::result::Result<T, Error>;

