//! # TMesh Logging
//!
//! Logging infrastructure for the TMesh firmware primitives.
//!
//! Components do not log through a global tag. Each one is handed a
//! [`Logger`] carrying its component name and a shared [`LogSink`], so tests
//! can swap the sink for a [`RecordingSink`] and firmware builds can forward
//! everything to the `log` facade.

// TMesh - tmesh-logging
// Module: Logging Infrastructure
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub use tmesh_error::{Error, Result};

/// Log level definitions for categorizing message severity.
///
/// Levels range from Trace (lowest severity) to Critical (highest severity).
pub mod level;

/// Log operation data structures.
///
/// A log operation is one message plus its level and originating component.
pub mod operation;

/// Log sinks receiving log operations.
pub mod sink;

/// Component-scoped logger handed to each primitive.
pub mod logger;

pub use level::{LogLevel, ParseLogLevelError};
pub use logger::Logger;
pub use operation::LogOperation;
#[cfg(feature = "log")]
#[cfg_attr(docsrs, doc(cfg(feature = "log")))]
pub use sink::FacadeSink;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use sink::RecordingSink;
pub use sink::{LogSink, NullSink};
