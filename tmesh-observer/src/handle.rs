//! Identifiers for subjects and their observer registrations.

use core::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_SUBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a [`Subject`](crate::Subject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectId(u64);

impl SubjectId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SUBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier value
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subject#{}", self.0)
    }
}

/// Token returned by observer registration, used to remove it again.
///
/// A handle names the subject that issued it and a serial number that the
/// subject never hands out twice, including across `deinit`. A handle for a
/// removed observer therefore can never match a later registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverHandle {
    subject: SubjectId,
    serial: u64,
}

impl ObserverHandle {
    pub(crate) const fn new(subject: SubjectId, serial: u64) -> Self {
        Self { subject, serial }
    }

    /// Subject that issued this handle
    #[must_use]
    pub const fn subject(&self) -> SubjectId {
        self.subject
    }

    /// Registration serial within the issuing subject
    #[must_use]
    pub const fn serial(&self) -> u64 {
        self.serial
    }
}

impl fmt::Display for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}@{}", self.serial, self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_ids_are_unique() {
        let a = SubjectId::next();
        let b = SubjectId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn test_subject_ids_do_not_wrap_at_u32() {
        let a = SubjectId::next();
        NEXT_SUBJECT_ID.fetch_max(u64::from(u32::MAX), Ordering::Relaxed);
        let past = SubjectId::next();
        let after = SubjectId::next();

        assert!(past.get() >= u64::from(u32::MAX));
        assert!(after.get() > u64::from(u32::MAX));
        assert_ne!(after, a);
        assert!(after > past);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_handle_display() {
        let handle = ObserverHandle::new(SubjectId(3), 7);
        assert_eq!(handle.to_string(), "observer#7@subject#3");
        assert_eq!(handle.serial(), 7);
        assert_eq!(handle.subject().get(), 3);
    }
}
