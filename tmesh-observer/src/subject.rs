//! Single-value subject.
//!
//! Registrations are kept in an owned vector in registration order. Each
//! one is identified by an [`ObserverHandle`] that the subject never
//! reissues.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use tmesh_error::{Error, Result};
use tmesh_logging::{LogLevel, Logger};

use crate::{
    handle::{ObserverHandle, SubjectId},
    limits::SubjectLimits,
    observer::{ContextObserver, Observer},
};

/// Component tag used by the default subject logger
pub const SUBJECT_COMPONENT: &str = "TMESH_OBSERVER";

struct Registration {
    handle: ObserverHandle,
    observer: Box<dyn Observer>,
}

/// Observable state of a subject at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSnapshot {
    /// Current value
    pub value: i32,
    /// Number of registered observers
    pub observer_count: usize,
    /// Registered handles in notification order
    pub handles: Vec<ObserverHandle>,
}

/// Publisher of one `i32` value
///
/// # Invariants
///
/// 1. `observer_count()` equals the number of registrations
/// 2. Notification order equals registration order
/// 3. No handle is issued twice by the same subject
pub struct Subject {
    id: SubjectId,
    value: i32,
    observers: Vec<Registration>,
    observer_count: usize,
    next_serial: u64,
    limits: SubjectLimits,
    logger: Logger,
}

impl Subject {
    /// Creates an empty subject logging through the default component
    /// logger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(Logger::for_component(SUBJECT_COMPONENT))
    }

    /// Creates an empty subject logging through `logger`.
    #[must_use]
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            id: SubjectId::next(),
            value: 0,
            observers: Vec::new(),
            observer_count: 0,
            next_serial: 0,
            limits: SubjectLimits::default(),
            logger,
        }
    }

    /// Creates an empty subject bounded by `limits`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `limits` is rejected.
    pub fn with_limits(limits: SubjectLimits, logger: Logger) -> Result<Self> {
        if let Err(error) = limits.validate() {
            logger.log_error("Invalid subject limits", &error);
            return Err(error);
        }
        let mut subject = Self::with_logger(logger);
        subject.limits = limits;
        Ok(subject)
    }

    /// Resets to the freshly constructed state: value 0, no observers.
    ///
    /// Handles issued before the reset stay invalid.
    pub fn init(&mut self) {
        self.reset();
        self.logger.log_fmt(LogLevel::Debug, format_args!("{} initialized", self.id));
    }

    /// Registers `callback` at the tail of the notification order.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when the observer limit is reached, or a
    /// memory error when the registry cannot grow.
    pub fn add_observer<F>(&mut self, callback: F) -> Result<ObserverHandle>
    where
        F: Fn(ObserverHandle, &Subject) + 'static,
    {
        self.register(callback)
    }

    /// Registers `callback` together with a user `context`.
    ///
    /// The context is owned by the registration and passed to the callback
    /// by reference on every notification. It is dropped on removal.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subject::add_observer`].
    pub fn add_observer_with_context<C, F>(
        &mut self,
        context: C,
        callback: F,
    ) -> Result<ObserverHandle>
    where
        C: 'static,
        F: Fn(ObserverHandle, &Subject, &C) + 'static,
    {
        self.register(ContextObserver::new(context, callback))
    }

    /// Registers any [`Observer`] implementation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subject::add_observer`].
    pub fn register<O: Observer + 'static>(&mut self, observer: O) -> Result<ObserverHandle> {
        self.register_boxed(Box::new(observer))
    }

    /// Registers an already boxed observer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subject::add_observer`].
    pub fn register_boxed(&mut self, observer: Box<dyn Observer>) -> Result<ObserverHandle> {
        if self.observer_count >= self.limits.max_observers {
            let error = Error::observer_limit_exceeded("Subject observer limit reached");
            self.logger.log_error("add_observer", &error);
            return Err(error);
        }
        if self.observers.try_reserve(1).is_err() {
            let error = Error::allocation_failed("Failed to allocate memory for observer");
            self.logger.log_error("add_observer", &error);
            return Err(error);
        }

        let handle = ObserverHandle::new(self.id, self.next_serial);
        self.next_serial = self.next_serial.wrapping_add(1);
        self.observers.push(Registration { handle, observer });
        self.observer_count += 1;

        self.logger.log_fmt(LogLevel::Trace, format_args!("Registered {handle}"));
        Ok(handle)
    }

    /// Stores `value` and notifies every observer in registration order.
    ///
    /// Fires even when `value` equals the current value. Returns the number
    /// of observers notified.
    pub fn update_value(&mut self, value: i32) -> usize {
        self.value = value;

        let subject = &*self;
        for registration in &subject.observers {
            registration.observer.notify(registration.handle, subject);
        }
        subject.observers.len()
    }

    /// Unregisters the observer behind `handle` and drops it.
    ///
    /// # Errors
    ///
    /// Fails without changing anything when `handle` was issued by another
    /// subject (parameter error), when no observers are registered, or when
    /// `handle` is no longer registered (resource errors).
    pub fn remove_observer(&mut self, handle: ObserverHandle) -> Result<()> {
        if handle.subject() != self.id {
            let error =
                Error::foreign_observer_handle("Observer handle belongs to another subject");
            self.logger.log_error("remove_observer", &error);
            return Err(error);
        }
        if self.observers.is_empty() {
            let error = Error::no_observers("No observers found in subject");
            self.logger.log_error("remove_observer", &error);
            return Err(error);
        }

        let Some(position) = self.observers.iter().position(|r| r.handle == handle) else {
            let error = Error::observer_not_found("Observer not registered with subject");
            self.logger.log_error("remove_observer", &error);
            return Err(error);
        };

        self.observers.remove(position);
        self.observer_count -= 1;

        self.logger.log_fmt(LogLevel::Trace, format_args!("Removed {handle}"));
        Ok(())
    }

    /// Drops every observer and resets the value to 0.
    ///
    /// The subject stays usable afterwards.
    pub fn deinit(&mut self) {
        self.reset();
        self.logger.log_fmt(LogLevel::Debug, format_args!("{} deinitialized", self.id));
    }

    fn reset(&mut self) {
        self.observers.clear();
        self.observer_count = 0;
        self.value = 0;
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Number of registered observers.
    #[inline]
    #[must_use]
    pub const fn observer_count(&self) -> usize {
        self.observer_count
    }

    /// Returns `true` if no observers are registered.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observer_count == 0
    }

    /// Whether `handle` is currently registered with this subject.
    #[must_use]
    pub fn contains(&self, handle: ObserverHandle) -> bool {
        handle.subject() == self.id && self.observers.iter().any(|r| r.handle == handle)
    }

    /// Registered handles in notification order.
    pub fn handles(&self) -> impl Iterator<Item = ObserverHandle> + '_ {
        self.observers.iter().map(|r| r.handle)
    }

    /// Identifier stamped into every handle this subject issues.
    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }

    /// Registration limits.
    #[must_use]
    pub const fn limits(&self) -> &SubjectLimits {
        &self.limits
    }

    /// Logger receiving this subject's diagnostics.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Capture value, count and handles.
    #[must_use]
    pub fn snapshot(&self) -> SubjectSnapshot {
        SubjectSnapshot {
            value: self.value,
            observer_count: self.observer_count,
            handles: self.handles().collect(),
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Handles<'a>(&'a [Registration]);

        impl fmt::Debug for Handles<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter().map(|r| r.handle)).finish()
            }
        }

        f.debug_struct("Subject")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("observer_count", &self.observer_count)
            .field("observers", &Handles(&self.observers))
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::{Cell, RefCell};

    use super::*;

    fn silent() -> Subject {
        Subject::with_logger(Logger::silent("TMESH_TEST"))
    }

    #[test]
    fn test_new_subject_is_empty() {
        let subject = silent();
        assert_eq!(subject.value(), 0);
        assert_eq!(subject.observer_count(), 0);
        assert!(subject.is_empty());
    }

    #[test]
    fn test_update_without_observers() {
        let mut subject = silent();
        assert_eq!(subject.update_value(5), 0);
        assert_eq!(subject.value(), 5);
    }

    #[test]
    fn test_notifies_in_registration_order() -> Result<()> {
        let mut subject = silent();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in 1..=3 {
            let order = Rc::clone(&order);
            subject.add_observer(move |_, s| order.borrow_mut().push((tag, s.value())))?;
        }

        assert_eq!(subject.update_value(9), 3);
        assert_eq!(*order.borrow(), [(1, 9), (2, 9), (3, 9)]);
        Ok(())
    }

    #[test]
    fn test_fires_on_unchanged_value() -> Result<()> {
        let mut subject = silent();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            subject.add_observer(move |_, _| calls.set(calls.get() + 1))?;
        }

        subject.update_value(3);
        subject.update_value(3);
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[test]
    fn test_callback_receives_own_handle() -> Result<()> {
        let mut subject = silent();
        let seen = Rc::new(Cell::new(None));
        let handle = {
            let seen = Rc::clone(&seen);
            subject.add_observer(move |h, _| seen.set(Some(h)))?
        };

        subject.update_value(1);
        assert_eq!(seen.get(), Some(handle));
        Ok(())
    }

    #[test]
    fn test_context_observer() -> Result<()> {
        let mut subject = silent();
        let sum = Rc::new(Cell::new(0));

        subject.add_observer_with_context(
            (Rc::clone(&sum), 100),
            |_, s, (sum, offset): &(Rc<Cell<i32>>, i32)| sum.set(sum.get() + s.value() + offset),
        )?;

        subject.update_value(5);
        assert_eq!(sum.get(), 105);
        Ok(())
    }

    #[test]
    fn test_remove_head_middle_tail() -> Result<()> {
        let mut subject = silent();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for tag in 0..5 {
            let log = Rc::clone(&log);
            handles.push(subject.add_observer(move |_, _| log.borrow_mut().push(tag))?);
        }

        subject.remove_observer(handles[0])?;
        subject.remove_observer(handles[2])?;
        subject.remove_observer(handles[4])?;
        assert_eq!(subject.observer_count(), 2);

        subject.update_value(1);
        assert_eq!(*log.borrow(), [1, 3]);
        Ok(())
    }

    #[test]
    fn test_remove_twice_fails() -> Result<()> {
        let mut subject = silent();
        let a = subject.add_observer(|_, _| {})?;
        let _b = subject.add_observer(|_, _| {})?;

        subject.remove_observer(a)?;
        let error = subject.remove_observer(a).unwrap_err();
        assert_eq!(error.code, tmesh_error::codes::OBSERVER_NOT_FOUND);
        assert_eq!(subject.observer_count(), 1);
        Ok(())
    }

    #[test]
    fn test_remove_from_empty_subject() -> Result<()> {
        let mut subject = silent();
        let handle = subject.add_observer(|_, _| {})?;
        subject.remove_observer(handle)?;

        let error = subject.remove_observer(handle).unwrap_err();
        assert_eq!(error.code, tmesh_error::codes::NO_OBSERVERS);
        Ok(())
    }

    #[test]
    fn test_foreign_handle_rejected() -> Result<()> {
        let mut first = silent();
        let mut second = silent();
        let foreign = first.add_observer(|_, _| {})?;
        second.add_observer(|_, _| {})?;

        let before = second.snapshot();
        let error = second.remove_observer(foreign).unwrap_err();
        assert!(error.is_parameter_error());
        assert_eq!(second.snapshot(), before);
        assert!(!second.contains(foreign));
        assert!(first.contains(foreign));
        Ok(())
    }

    #[test]
    fn test_observer_limit() -> Result<()> {
        let mut subject =
            Subject::with_limits(SubjectLimits { max_observers: 2 }, Logger::silent("TMESH_TEST"))?;
        subject.add_observer(|_, _| {})?;
        subject.add_observer(|_, _| {})?;

        let error = subject.add_observer(|_, _| {}).unwrap_err();
        assert!(error.is_capacity_error());
        assert_eq!(subject.observer_count(), 2);
        Ok(())
    }

    #[test]
    fn test_with_limits_rejects_zero() {
        let result =
            Subject::with_limits(SubjectLimits { max_observers: 0 }, Logger::silent("TMESH_TEST"));
        assert!(result.is_err());
    }

    #[test]
    fn test_deinit_drops_contexts() -> Result<()> {
        let mut subject = silent();
        let token = Rc::new(());
        subject.add_observer_with_context(Rc::clone(&token), |_, _, _| {})?;
        assert_eq!(Rc::strong_count(&token), 2);

        subject.update_value(4);
        subject.deinit();
        assert_eq!(Rc::strong_count(&token), 1);
        assert_eq!(subject.value(), 0);
        assert_eq!(subject.observer_count(), 0);
        Ok(())
    }

    #[test]
    fn test_handles_not_reused_after_deinit() -> Result<()> {
        let mut subject = silent();
        let old = subject.add_observer(|_, _| {})?;
        subject.deinit();
        subject.init();

        let new = subject.add_observer(|_, _| {})?;
        assert_ne!(old, new);
        assert!(subject.remove_observer(old).is_err());
        assert!(subject.contains(new));
        Ok(())
    }

    #[test]
    fn test_handles_listed_in_order() -> Result<()> {
        let mut subject = silent();
        let a = subject.add_observer(|_, _| {})?;
        let b = subject.add_observer(|_, _| {})?;
        let c = subject.add_observer(|_, _| {})?;
        subject.remove_observer(b)?;

        let handles: Vec<_> = subject.handles().collect();
        assert_eq!(handles, [a, c]);
        Ok(())
    }
}
