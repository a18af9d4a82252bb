// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::mem;

/// An unchecked position into a [`ParapetVec`](crate::ParapetVec)'s storage.
///
/// `RawPos` is plain address arithmetic: it never dereferences and never
/// consults the container, so stepping it out of range is the caller's
/// responsibility. All arithmetic is wrapping, which keeps an out-of-range
/// position representable (and comparable) rather than undefined; actual
/// reads and writes happen only inside the container or a checked cursor
/// after validation.
///
/// Obtained from [`begin`](crate::ParapetVec::begin) /
/// [`end`](crate::ParapetVec::end), and from a checked cursor via
/// [`plain`](crate::CheckedCursor::plain). A reallocation of the source
/// container invalidates every outstanding `RawPos`.
pub struct RawPos<T> {
    ptr: *mut T,
}

impl<T> RawPos<T> {
    pub(crate) fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    pub(crate) fn as_ptr(self) -> *mut T {
        self.ptr
    }

    /// The position `n` slots toward `end`.
    #[inline]
    pub fn add(self, n: usize) -> Self {
        Self {
            ptr: self.ptr.wrapping_add(n),
        }
    }

    /// The position `n` slots toward `begin`.
    #[inline]
    pub fn sub(self, n: usize) -> Self {
        Self {
            ptr: self.ptr.wrapping_sub(n),
        }
    }

    /// The position `n` signed slots away.
    #[inline]
    pub fn offset(self, n: isize) -> Self {
        Self {
            ptr: self.ptr.wrapping_offset(n),
        }
    }

    /// Signed slot distance from `origin` to `self`.
    ///
    /// Meaningful only when both positions point into the same container's
    /// storage; across containers the result is unspecified.
    #[inline]
    pub fn distance(self, origin: Self) -> isize {
        let bytes = (self.ptr as isize).wrapping_sub(origin.ptr as isize);
        bytes / mem::size_of::<T>() as isize
    }
}

// Derives would demand T: Clone / T: Copy; the position is address-only.
impl<T> Clone for RawPos<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawPos<T> {}

impl<T> PartialEq for RawPos<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for RawPos<T> {}

impl<T> PartialOrd for RawPos<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RawPos<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> fmt::Debug for RawPos<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPos").field(&self.ptr).finish()
    }
}
