//! Collections with explicit allocation-failure reporting.

pub mod dyn_array;

pub use dyn_array::{DynArray, PushError};
