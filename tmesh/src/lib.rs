// TMesh - tmesh
// Module: Umbrella crate
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! TMesh firmware primitives
//!
//! Two small building blocks used throughout the mesh firmware:
//!
//! - [`DynArray`]: a growable, contiguous, owned sequence with a
//!   push/pop interface and a deterministic growth policy
//!   (`max(4, capacity * 2)` by default).
//! - [`Subject`]: a holder of one `i32` value that notifies its observers
//!   synchronously, in registration order, on every update.
//!
//! Both are compatible with `no_std` + `alloc` targets.
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `log`: forward subject diagnostics to the `log` facade
//! - `tracing`: spans around array growth
//! - `embedded-small`: cap array growth for MCU-class targets
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use tmesh::{DynArray, Subject};
//!
//! let readings = Rc::new(RefCell::new(DynArray::new()));
//! let mut battery = Subject::new();
//!
//! {
//!     let readings = Rc::clone(&readings);
//!     battery.add_observer(move |_, subject| {
//!         // A full array just drops the reading
//!         let _ = readings.borrow_mut().try_push(subject.value());
//!     })?;
//! }
//!
//! battery.update_value(91);
//! battery.update_value(90);
//! assert_eq!(readings.borrow().as_slice(), &[91, 90]);
//! # Ok::<(), tmesh::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod prelude;

pub use tmesh_error::{codes, Error, ErrorCategory, Result};
pub use tmesh_foundation::{DynArray, GrowthPolicy, PushError};
pub use tmesh_logging::{LogLevel, LogOperation, LogSink, Logger, NullSink};
pub use tmesh_observer::{
    ContextObserver, Observer, ObserverHandle, Subject, SubjectId, SubjectLimits,
    SubjectSnapshot,
};

/// Error handling types
pub mod error {
    pub use tmesh_error::*;
}

/// Collections
pub mod foundation {
    pub use tmesh_foundation::*;
}

/// Logging infrastructure
pub mod logging {
    pub use tmesh_logging::*;
}

/// Subject/observer notification
pub mod observer {
    pub use tmesh_observer::*;
}
