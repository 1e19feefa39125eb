// TMesh - tmesh-foundation
// Module: DynArray - Growable heap array
//
// Copyright (c) 2025 The TMesh Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable array with a configurable growth policy.
//!
//! `DynArray<T>` appends in amortized O(1) and removes from the end in O(1).
//! Growth follows a [`GrowthPolicy`] (doubling from 4 by default) and the
//! buffer never shrinks.
//!
//! # Characteristics
//!
//! - **Lazy allocation**: an empty array owns no buffer
//! - **Fallible growth**: allocation failure is returned, never ignored
//! - **No data loss**: [`DynArray::try_push`] hands a rejected item back
//! - **Stable capacity**: `capacity` only changes on growth

use alloc::vec::Vec;
use core::{fmt, ops::Deref, slice};

use tmesh_error::{Error, Result};

use crate::limits::GrowthPolicy;

/// A push that could not be satisfied.
///
/// Carries the rejected item so the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushError<T> {
    item: T,
    error: Error,
}

impl<T> PushError<T> {
    /// The item that was not stored
    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }

    /// The reason the push failed
    #[must_use]
    pub const fn error(&self) -> Error {
        self.error
    }

    /// Discard the item and keep the error
    #[must_use]
    pub fn into_error(self) -> Error {
        self.error
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push rejected: {}", self.error)
    }
}

/// A growable array owning a contiguous buffer of `T`.
///
/// # Invariants
///
/// 1. `len() <= capacity()` always holds
/// 2. `capacity() <= policy().max_capacity`
/// 3. `capacity()` never decreases
///
/// # Examples
///
/// ```
/// use tmesh_foundation::collections::DynArray;
///
/// let mut array = DynArray::<u32>::new();
/// for i in 0..5 {
///     array.push(i)?;
/// }
/// assert_eq!(array.len(), 5);
/// assert_eq!(array.capacity(), 8);
/// assert_eq!(array.pop(), Some(4));
/// # Ok::<(), tmesh_error::Error>(())
/// ```
pub struct DynArray<T> {
    /// Backing storage; holds at least `capacity` reserved slots
    items: Vec<T>,

    /// Logical capacity handed out by the growth policy
    capacity: usize,

    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// Creates an empty array with the platform growth policy.
    ///
    /// Does not allocate. The policy is [`GrowthPolicy::platform`], which is
    /// capped at [`MAX_ARRAY_CAPACITY`](crate::limits::embedded::MAX_ARRAY_CAPACITY)
    /// under the `embedded-small` feature and unbounded otherwise.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            policy: GrowthPolicy::platform(),
        }
    }

    /// Creates an empty array growing by `policy`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the policy is rejected by
    /// [`GrowthPolicy::validate`].
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            items: Vec::new(),
            capacity: 0,
            policy,
        })
    }

    /// Appends `item` at the tail.
    ///
    /// Grows the buffer first when full. Growth may move the buffer, so
    /// references into the array do not survive a push.
    ///
    /// # Errors
    ///
    /// Returns a memory error if the allocator refuses the growth, or a
    /// capacity error if the policy maximum is reached. The array is left
    /// unchanged and `item` is dropped; use [`DynArray::try_push`] to get it
    /// back.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<()> {
        self.try_push(item).map_err(PushError::into_error)
    }

    /// Appends `item` at the tail, returning it on failure.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DynArray::push`]; the error carries `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmesh_foundation::{collections::DynArray, GrowthPolicy};
    ///
    /// let policy = GrowthPolicy::default().with_max_capacity(4);
    /// let mut array = DynArray::with_policy(policy)?;
    /// for i in 0..4 {
    ///     array.push(i)?;
    /// }
    /// let rejected = array.try_push(99).unwrap_err();
    /// assert_eq!(rejected.into_item(), 99);
    /// assert_eq!(array.len(), 4);
    /// # Ok::<(), tmesh_error::Error>(())
    /// ```
    pub fn try_push(&mut self, item: T) -> core::result::Result<(), PushError<T>> {
        if self.items.len() == self.capacity {
            let needed = match self.items.len().checked_add(1) {
                Some(needed) => needed,
                None => {
                    return Err(PushError {
                        item,
                        error: Error::capacity_overflow("DynArray length overflow"),
                    })
                }
            };
            if let Err(error) = self.reserve_to(needed) {
                return Err(PushError { item, error });
            }
        }

        // Within reserved capacity: does not reallocate
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// The buffer is not shrunk.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Ensures room for `additional` more elements, growing by the policy.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DynArray::push`]; the array is unchanged on
    /// failure.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(Error::capacity_overflow("DynArray length overflow"))?;
        self.reserve_to(needed)
    }

    /// Grow the logical capacity by policy steps until it covers `needed`.
    fn reserve_to(&mut self, needed: usize) -> Result<()> {
        if needed <= self.capacity {
            return Ok(());
        }

        let mut target = self.capacity;
        while target < needed {
            target = self.policy.next_capacity(target)?;
        }

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ArrayTrace::growing(self.capacity, target).entered();

        // try_reserve_exact counts from len, not from the current allocation
        let additional = target - self.items.len();
        if self.items.try_reserve_exact(additional).is_err() {
            #[cfg(feature = "tracing")]
            ::tracing::warn!(requested = target, "DynArray allocation failed");
            return Err(Error::allocation_failed("DynArray buffer growth failed"));
        }

        self.capacity = target;
        Ok(())
    }

    /// Appends clones of every element in `values`.
    ///
    /// Capacity for the whole slice is reserved up front, so either all
    /// elements are appended or none are.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DynArray::reserve`].
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.reserve(values.len())?;
        self.items.extend_from_slice(values);
        Ok(())
    }

    /// Drops every element, keeping the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Allocated slot count.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Growth policy of this array.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Element at `index`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable element at `index`, if present.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iterator over the elements in insertion order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

// Clone keeps the logical capacity so the copy grows on the same schedule
impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("items", &self.items)
            .field("count", &self.items.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unallocated() {
        let array: DynArray<u32> = DynArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn test_growth_sequence() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        let mut seen = Vec::new();

        for i in 0..17 {
            array.push(i)?;
            if seen.last() != Some(&array.capacity()) {
                seen.push(array.capacity());
            }
        }

        assert_eq!(seen, [4, 8, 16, 32]);
        Ok(())
    }

    #[test]
    fn test_push_pop_lifo() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        array.push(1)?;
        array.push(2)?;
        array.push(3)?;

        assert_eq!(array.pop(), Some(3));
        assert_eq!(array.pop(), Some(2));
        assert_eq!(array.pop(), Some(1));
        assert_eq!(array.pop(), None);

        Ok(())
    }

    #[test]
    fn test_pop_does_not_shrink() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        for i in 0..9 {
            array.push(i)?;
        }
        assert_eq!(array.capacity(), 16);

        while array.pop().is_some() {}
        assert_eq!(array.capacity(), 16);
        assert!(array.is_empty());

        Ok(())
    }

    #[test]
    fn test_pop_empty_leaves_state() {
        let mut array = DynArray::<u32>::new();
        assert_eq!(array.pop(), None);
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn test_max_capacity_rejects_push() -> Result<()> {
        let policy = GrowthPolicy::default().with_max_capacity(6);
        let mut array = DynArray::with_policy(policy)?;

        for i in 0..6 {
            array.push(i)?;
        }
        assert_eq!(array.capacity(), 6);

        let error = array.push(6).unwrap_err();
        assert!(error.is_capacity_error());
        assert_eq!(array.len(), 6);
        assert_eq!(array.last(), Some(&5));

        Ok(())
    }

    #[test]
    fn test_try_push_returns_item() -> Result<()> {
        let policy = GrowthPolicy::default().with_max_capacity(4);
        let mut array = DynArray::with_policy(policy)?;
        for i in 0..4 {
            array.push(i)?;
        }

        let rejected = array.try_push(42).unwrap_err();
        assert!(rejected.error().is_capacity_error());
        assert_eq!(rejected.into_item(), 42);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_with_policy_validates() {
        let policy = GrowthPolicy { growth_factor: 0, ..GrowthPolicy::default() };
        assert!(DynArray::<u8>::with_policy(policy).is_err());
    }

    #[test]
    fn test_reserve_follows_policy() -> Result<()> {
        let mut array = DynArray::<u8>::new();
        array.reserve(5)?;
        assert_eq!(array.capacity(), 8);
        array.reserve(3)?;
        assert_eq!(array.capacity(), 8);
        assert!(array.reserve(usize::MAX).is_err());
        assert_eq!(array.capacity(), 8);
        Ok(())
    }

    #[test]
    fn test_extend_from_slice_all_or_nothing() -> Result<()> {
        let policy = GrowthPolicy::default().with_max_capacity(8);
        let mut array = DynArray::with_policy(policy)?;
        array.extend_from_slice(&[1, 2, 3])?;
        assert_eq!(array.as_slice(), &[1, 2, 3]);

        assert!(array.extend_from_slice(&[0; 6]).is_err());
        assert_eq!(array.as_slice(), &[1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_clear_keeps_capacity() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        array.extend_from_slice(&[1, 2, 3, 4, 5])?;
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 8);
        Ok(())
    }

    #[test]
    fn test_clone_preserves_capacity() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        array.extend_from_slice(&[7, 8, 9])?;
        let copy = array.clone();
        assert_eq!(copy, array);
        assert_eq!(copy.capacity(), 4);
        Ok(())
    }

    #[test]
    fn test_accessors() -> Result<()> {
        let mut array = DynArray::<u32>::new();
        array.extend_from_slice(&[10, 20, 30])?;

        assert_eq!(array.get(1), Some(&20));
        assert_eq!(array.get(3), None);
        if let Some(slot) = array.get_mut(0) {
            *slot = 11;
        }
        assert_eq!(array[0], 11);
        assert_eq!(array.iter().sum::<u32>(), 61);

        for value in array.iter_mut() {
            *value += 1;
        }
        let collected: Vec<u32> = array.into_iter().collect();
        assert_eq!(collected, [12, 21, 31]);

        Ok(())
    }

    #[test]
    fn test_allocator_refusal_is_memory_error() -> Result<()> {
        let mut array = DynArray::<[u8; 1 << 20]>::with_policy(GrowthPolicy::default())?;
        let error = array.reserve(usize::MAX / 8).unwrap_err();
        assert!(error.is_memory_error());
        assert_eq!(error.code, tmesh_error::codes::ALLOCATION_FAILED);
        assert_eq!(array.capacity(), 0);
        assert_eq!(array.len(), 0);
        Ok(())
    }

    #[test]
    fn test_try_push_hands_back_item_on_allocator_refusal() -> Result<()> {
        // The first growth step already asks for more than any allocator has
        let policy = GrowthPolicy { initial_capacity: usize::MAX / 4, ..GrowthPolicy::default() };
        let mut array = DynArray::<u64>::with_policy(policy)?;

        let rejected = array.try_push(7).unwrap_err();
        assert!(rejected.error().is_memory_error());
        assert_eq!(rejected.into_item(), 7);
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
        Ok(())
    }

    #[test]
    fn test_new_uses_platform_policy() {
        let array = DynArray::<u8>::new();
        assert_eq!(*array.policy(), GrowthPolicy::platform());
        assert_eq!(DynArray::<u8>::default().policy(), array.policy());
    }

    #[cfg(feature = "embedded-small")]
    #[test]
    fn test_embedded_small_caps_default_array() -> Result<()> {
        use crate::limits::embedded::MAX_ARRAY_CAPACITY;

        let mut array = DynArray::<u32>::new();
        for i in 0..MAX_ARRAY_CAPACITY {
            array.push(u32::try_from(i).unwrap_or(u32::MAX))?;
        }
        assert_eq!(array.capacity(), MAX_ARRAY_CAPACITY);

        let error = array.push(0).unwrap_err();
        assert!(error.is_capacity_error());
        assert_eq!(array.len(), MAX_ARRAY_CAPACITY);
        Ok(())
    }

    #[test]
    fn test_zero_sized_elements() -> Result<()> {
        let mut array = DynArray::<()>::new();
        for _ in 0..10 {
            array.push(())?;
        }
        assert_eq!(array.len(), 10);
        assert_eq!(array.capacity(), 16);
        Ok(())
    }
}
