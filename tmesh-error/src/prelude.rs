// TMesh - tmesh-error
// Module: TMesh Error Prelude
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for tmesh-error
//!
//! Common imports shared by the crates of the workspace in both std and
//! `no_std` builds.

pub use core::{
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{codes, Error, ErrorCategory, ErrorSource, Result};
