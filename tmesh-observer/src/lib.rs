// TMesh - tmesh-observer
// Module: Subject / Observer notification
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Single-value subject/observer notification.
//!
//! A [`Subject`] holds one `i32` value and an ordered list of observers.
//! Every [`Subject::update_value`] call stores the new value and then
//! synchronously notifies each observer in registration order.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use tmesh_observer::Subject;
//!
//! let mut battery = Subject::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let handle = {
//!     let seen = Rc::clone(&seen);
//!     battery.add_observer(move |_, subject| seen.set(subject.value()))?
//! };
//!
//! battery.update_value(87);
//! assert_eq!(seen.get(), 87);
//!
//! battery.remove_observer(handle)?;
//! battery.update_value(12);
//! assert_eq!(seen.get(), 87);
//! # Ok::<(), tmesh_error::Error>(())
//! ```
//!
//! # Constraints
//!
//! - Single-threaded: a subject is not `Send`; wrap it in external mutual
//!   exclusion to share it.
//! - Observers receive a shared borrow of the subject, so they cannot add or
//!   remove observers while a notification is running.
//! - A slow observer delays every observer registered after it.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub use tmesh_error::{Error, Result};

pub mod handle;
pub mod limits;
pub mod observer;
pub mod subject;

pub use handle::{ObserverHandle, SubjectId};
pub use limits::SubjectLimits;
pub use observer::{ContextObserver, Observer};
pub use subject::{Subject, SubjectSnapshot, SUBJECT_COMPONENT};
