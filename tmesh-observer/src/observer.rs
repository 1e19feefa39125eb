//! Observer callbacks.

use crate::{handle::ObserverHandle, subject::Subject};

/// Receiver of subject notifications
///
/// Implemented for every `Fn(ObserverHandle, &Subject)` closure. Observers
/// needing mutable state keep it behind `Cell`/`RefCell` or atomics.
pub trait Observer {
    /// Called after `subject` stored a new value
    fn notify(&self, handle: ObserverHandle, subject: &Subject);
}

impl<F> Observer for F
where
    F: Fn(ObserverHandle, &Subject),
{
    fn notify(&self, handle: ObserverHandle, subject: &Subject) {
        self(handle, subject);
    }
}

/// Callback paired with a user context handed to it on every notification
pub struct ContextObserver<C, F> {
    context: C,
    callback: F,
}

impl<C, F> ContextObserver<C, F>
where
    F: Fn(ObserverHandle, &Subject, &C),
{
    /// Pair `callback` with `context`
    pub const fn new(context: C, callback: F) -> Self {
        Self { context, callback }
    }

    /// Stored user context
    pub const fn context(&self) -> &C {
        &self.context
    }
}

impl<C, F> Observer for ContextObserver<C, F>
where
    F: Fn(ObserverHandle, &Subject, &C),
{
    fn notify(&self, handle: ObserverHandle, subject: &Subject) {
        (self.callback)(handle, subject, &self.context);
    }
}
