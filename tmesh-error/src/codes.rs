// TMesh - tmesh-error
// Module: TMesh Error Codes
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for TMesh

// Parameter error codes (1000-1999)
/// Handle was issued by a different subject
pub const FOREIGN_OBSERVER_HANDLE: u16 = 1001;

// Memory error codes (2000-2999)
/// Allocator could not satisfy a request
pub const ALLOCATION_FAILED: u16 = 2000;
/// Capacity computation overflowed `usize`
pub const CAPACITY_OVERFLOW: u16 = 2001;

// Capacity error codes (3000-3999)
/// Array reached its configured maximum capacity
pub const ARRAY_CAPACITY_EXCEEDED: u16 = 3001;
/// Subject reached its configured observer limit
pub const OBSERVER_LIMIT_EXCEEDED: u16 = 3002;

// Resource error codes (4000-4999)
/// Observer is not (or no longer) registered
pub const OBSERVER_NOT_FOUND: u16 = 4001;
/// Subject has no observers registered
pub const NO_OBSERVERS: u16 = 4002;

// Validation error codes (5000-5999)
/// Configuration value rejected
pub const INVALID_CONFIGURATION: u16 = 5000;

