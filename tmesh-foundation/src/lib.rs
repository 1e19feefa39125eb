// TMesh - tmesh-foundation
// Module: Foundation collections
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Foundation library for the TMesh firmware primitives.
//!
//! Provides [`collections::DynArray`], a growable array with an explicit
//! [`limits::GrowthPolicy`] that reports allocation failures to the caller
//! instead of aborting or dropping data.
//!
//! ```
//! use tmesh_foundation::collections::DynArray;
//!
//! let mut readings = DynArray::<u16>::new();
//! readings.push(512)?;
//! readings.push(768)?;
//! assert_eq!(readings.capacity(), 4);
//! assert_eq!(readings.pop(), Some(768));
//! # Ok::<(), tmesh_error::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub use tmesh_error::{Error, ErrorCategory, Result};

pub mod collections;
pub mod limits;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{DynArray, PushError};
pub use limits::GrowthPolicy;
