// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The random-access capability contract consumed by generic algorithms.
//!
//! `parapet-algo`'s sort and search routines are written against these two
//! traits only, never against a concrete cursor type. Any position handle
//! that can read, step, offset, measure distance, and compare satisfies the
//! contract; parapet's checked cursors are one such family.

use crate::error::RangeViolation;

/// A copyable random-access position with fallible read access.
///
/// Every operation that moves the position or touches an element reports a
/// [`RangeViolation`] instead of stepping outside the source container's
/// live bounds. Equality and ordering compare raw positions and are only
/// meaningful between cursors over the same container.
pub trait Cursor: Copy + PartialEq + PartialOrd + Sized {
    /// The element type behind the cursor.
    type Item: Clone;

    /// Reads a copy of the element at the current position.
    ///
    /// Fails when the position is `end`: a legal place to stand, not a legal
    /// place to read.
    fn read(&self) -> Result<Self::Item, RangeViolation>;

    /// Steps one slot toward `end`. Fails if already at `end`.
    fn advance(&mut self) -> Result<(), RangeViolation>;

    /// Steps one slot toward `begin`. Fails if already at `begin`.
    fn retreat(&mut self) -> Result<(), RangeViolation>;

    /// The position `n` signed slots away.
    ///
    /// Fails if the target would lie before `begin` or past `end`; `end`
    /// itself is a legal target.
    fn offset(self, n: isize) -> Result<Self, RangeViolation>;

    /// Signed slot distance from `origin` to `self`.
    ///
    /// Unspecified when the two cursors reference different containers.
    fn distance(&self, origin: &Self) -> isize;
}

/// A [`Cursor`] that can also overwrite the element at its position.
pub trait CursorMut: Cursor {
    /// Replaces the element at the current position, dropping the old value.
    ///
    /// Fails when the position is `end`.
    fn write(&mut self, value: Self::Item) -> Result<(), RangeViolation>;
}
