// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked cursors over a [`ParapetVec`].
//!
//! A checked cursor is a raw position plus a non-owning back-reference to
//! the container it came from. Bounds are never cached: every dereference
//! and every step re-fetches the owner's live `begin`/`end`, so what "in
//! range" means tracks the container as it exists now. The position
//! invariant is `begin <= current <= end`, with `end` legal to hold and
//! illegal to read.
//!
//! Both flavors wrap one private validation core ([`CursorCore`]) rather
//! than inheriting from each other: [`CheckedCursor`] exposes the read-only
//! capability set, [`CheckedCursorMut`] adds writes. Narrowing a mutable
//! cursor into a read-only one re-uses the already-validated position
//! without another check.
//!
//! The cursor borrows its container for `'v` (shared or exclusive), so the
//! container always outlives the cursor, and the container cannot be grown,
//! shrunk, or reallocated while any cursor family derived from it is alive.
//! The runtime re-validation against live bounds stays in place regardless:
//! cursor copies step independently of each other, and every one of them
//! answers to the container, not to a snapshot.
//!
//! Cursors move elements across the boundary by value only: `read` clones
//! out, `write` clones in. They never hand out references; with copyable
//! cursors such a reference could alias a `write` through another copy.
//! Reference access belongs to the container (`at`/`at_mut`), where the
//! borrow checker can see it.

use core::fmt;
use core::marker::PhantomData;
use core::mem;

use parapet_alloc::{HeapSlots, SlotAlloc};

use crate::error::RangeViolation;
use crate::parapet_vec::ParapetVec;
use crate::raw_pos::RawPos;
use crate::traits::{Cursor, CursorMut};

/// The shared position-and-validation state behind both cursor flavors.
pub(crate) struct CursorCore<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    current: *mut T,
    owner: *const ParapetVec<T, A>,
}

impl<T, A> CursorCore<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn at_begin(owner: &ParapetVec<T, A>) -> Self {
        Self {
            current: owner.begin().as_ptr(),
            owner,
        }
    }

    fn at_position(
        owner: &ParapetVec<T, A>,
        pos: RawPos<T>,
        op: &'static str,
    ) -> Result<Self, RangeViolation> {
        let core = Self {
            current: pos.as_ptr(),
            owner,
        };
        core.check_position(core.current, op)?;
        Ok(core)
    }

    /// The owning container, fetched through the back-reference.
    fn owner(&self) -> &ParapetVec<T, A> {
        // SAFETY: the wrapper types carry a borrow of the container for 'v,
        // so the owner outlives every cursor derived from it.
        unsafe { &*self.owner }
    }

    fn begin_ptr(&self) -> *mut T {
        self.owner().begin().as_ptr()
    }

    fn end_ptr(&self) -> *mut T {
        self.owner().end().as_ptr()
    }

    /// Validates `target` against the live `[begin, end]` window.
    fn check_position(&self, target: *mut T, op: &'static str) -> Result<(), RangeViolation> {
        if self.end_ptr() < target {
            return Err(RangeViolation::PassedEnd(op));
        }
        if target < self.begin_ptr() {
            return Err(RangeViolation::BeforeBegin(op));
        }
        Ok(())
    }

    /// The current position as a dereferenceable pointer, or a violation if
    /// it is `end`.
    fn deref_ptr(&self, op: &'static str) -> Result<*mut T, RangeViolation> {
        if self.current == self.end_ptr() {
            return Err(RangeViolation::DereferencedEnd(op));
        }
        Ok(self.current)
    }

    fn advance(&mut self, op: &'static str) -> Result<(), RangeViolation> {
        if self.current == self.end_ptr() {
            return Err(RangeViolation::PassedEnd(op));
        }
        self.current = self.current.wrapping_add(1);
        Ok(())
    }

    fn retreat(&mut self, op: &'static str) -> Result<(), RangeViolation> {
        if self.current == self.begin_ptr() {
            return Err(RangeViolation::BeforeBegin(op));
        }
        self.current = self.current.wrapping_sub(1);
        Ok(())
    }

    fn offset(mut self, n: isize, op: &'static str) -> Result<Self, RangeViolation> {
        let target = self.current.wrapping_offset(n);
        self.check_position(target, op)?;
        self.current = target;
        Ok(self)
    }

    fn distance(&self, origin: &Self) -> isize {
        let bytes = (self.current as isize).wrapping_sub(origin.current as isize);
        bytes / mem::size_of::<T>() as isize
    }

    fn to_begin(mut self) -> Self {
        self.current = self.begin_ptr();
        self
    }

    fn to_end(mut self) -> Self {
        self.current = self.end_ptr();
        self
    }

    fn pos(&self) -> RawPos<T> {
        RawPos::new(self.current)
    }
}

impl<T, A> Clone for CursorCore<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for CursorCore<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
}

/// A read-only bounds-checked cursor (the const-checked flavor).
///
/// Holds a shared borrow of its container for `'v`. Copies are cheap and
/// step independently; every operation re-validates against the container's
/// live bounds and reports a [`RangeViolation`] instead of going out of
/// range.
///
/// # Example
///
/// ```rust
/// use parapet_vec::{Cursor, ParapetVec};
///
/// let v = ParapetVec::with_size(3, 7u32);
/// let mut cur = v.cursor();
/// let end = cur.to_end();
///
/// let mut total = 0;
/// while cur != end {
///     total += cur.read().unwrap();
///     cur.advance().unwrap();
/// }
/// assert_eq!(total, 21);
/// assert!(cur.read().is_err());
/// ```
pub struct CheckedCursor<'v, T, A = HeapSlots>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    core: CursorCore<T, A>,
    _borrow: PhantomData<&'v ParapetVec<T, A>>,
}

impl<'v, T, A> CheckedCursor<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    pub(crate) fn at_begin(owner: &'v ParapetVec<T, A>) -> Self {
        Self {
            core: CursorCore::at_begin(owner),
            _borrow: PhantomData,
        }
    }

    pub(crate) fn at_position(
        owner: &'v ParapetVec<T, A>,
        pos: RawPos<T>,
    ) -> Result<Self, RangeViolation> {
        Ok(Self {
            core: CursorCore::at_position(owner, pos, "ParapetVec::try_cursor_at")?,
            _borrow: PhantomData,
        })
    }

    /// A cursor at the container's live `begin`.
    pub fn to_begin(self) -> Self {
        Self {
            core: self.core.to_begin(),
            _borrow: PhantomData,
        }
    }

    /// A cursor at the container's live `end`.
    pub fn to_end(self) -> Self {
        Self {
            core: self.core.to_end(),
            _borrow: PhantomData,
        }
    }

    /// Reads the element `n` signed slots away without moving the cursor.
    pub fn read_at(&self, n: isize) -> Result<T, RangeViolation> {
        self.offset(n)?.read()
    }

    /// The current position as an unchecked [`RawPos`].
    pub fn plain(&self) -> RawPos<T> {
        self.core.pos()
    }
}

impl<'v, T, A> Cursor for CheckedCursor<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    type Item = T;

    fn read(&self) -> Result<T, RangeViolation> {
        let slot = self.core.deref_ptr("CheckedCursor::read")?;
        // SAFETY: deref_ptr validated a constructed slot.
        Ok(unsafe { (*slot).clone() })
    }

    fn advance(&mut self) -> Result<(), RangeViolation> {
        self.core.advance("CheckedCursor::advance")
    }

    fn retreat(&mut self) -> Result<(), RangeViolation> {
        self.core.retreat("CheckedCursor::retreat")
    }

    fn offset(self, n: isize) -> Result<Self, RangeViolation> {
        Ok(Self {
            core: self.core.offset(n, "CheckedCursor::offset")?,
            _borrow: PhantomData,
        })
    }

    fn distance(&self, origin: &Self) -> isize {
        self.core.distance(&origin.core)
    }
}

impl<T, A> Clone for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
}

impl<T, A> fmt::Debug for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CheckedCursor").field(&self.core.current).finish()
    }
}

/// A bounds-checked cursor with write access.
///
/// Holds the container exclusively for `'v`; within that window, cursor
/// copies may read, step, and overwrite elements, but the container itself
/// cannot grow, shrink, or reallocate. Exposes every capability of
/// [`CheckedCursor`] plus [`write`](CursorMut::write), and narrows into one
/// via `From` without re-validation.
pub struct CheckedCursorMut<'v, T, A = HeapSlots>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    core: CursorCore<T, A>,
    _borrow: PhantomData<&'v mut ParapetVec<T, A>>,
}

impl<'v, T, A> CheckedCursorMut<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    pub(crate) fn at_begin(owner: &'v mut ParapetVec<T, A>) -> Self {
        Self {
            core: CursorCore::at_begin(owner),
            _borrow: PhantomData,
        }
    }

    pub(crate) fn at_position(
        owner: &'v mut ParapetVec<T, A>,
        pos: RawPos<T>,
    ) -> Result<Self, RangeViolation> {
        Ok(Self {
            core: CursorCore::at_position(owner, pos, "ParapetVec::try_cursor_mut_at")?,
            _borrow: PhantomData,
        })
    }

    /// A cursor at the container's live `begin`.
    pub fn to_begin(self) -> Self {
        Self {
            core: self.core.to_begin(),
            _borrow: PhantomData,
        }
    }

    /// A cursor at the container's live `end`.
    pub fn to_end(self) -> Self {
        Self {
            core: self.core.to_end(),
            _borrow: PhantomData,
        }
    }

    /// Reads the element `n` signed slots away without moving the cursor.
    pub fn read_at(&self, n: isize) -> Result<T, RangeViolation> {
        self.offset(n)?.read()
    }

    /// The current position as an unchecked [`RawPos`].
    pub fn plain(&self) -> RawPos<T> {
        self.core.pos()
    }
}

impl<'v, T, A> Cursor for CheckedCursorMut<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    type Item = T;

    fn read(&self) -> Result<T, RangeViolation> {
        let slot = self.core.deref_ptr("CheckedCursorMut::read")?;
        // SAFETY: deref_ptr validated a constructed slot.
        Ok(unsafe { (*slot).clone() })
    }

    fn advance(&mut self) -> Result<(), RangeViolation> {
        self.core.advance("CheckedCursorMut::advance")
    }

    fn retreat(&mut self) -> Result<(), RangeViolation> {
        self.core.retreat("CheckedCursorMut::retreat")
    }

    fn offset(self, n: isize) -> Result<Self, RangeViolation> {
        Ok(Self {
            core: self.core.offset(n, "CheckedCursorMut::offset")?,
            _borrow: PhantomData,
        })
    }

    fn distance(&self, origin: &Self) -> isize {
        self.core.distance(&origin.core)
    }
}

impl<'v, T, A> CursorMut for CheckedCursorMut<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn write(&mut self, value: T) -> Result<(), RangeViolation> {
        let slot = self.core.deref_ptr("CheckedCursorMut::write")?;
        // SAFETY: deref_ptr validated a constructed slot; assignment drops
        // the old element in place.
        unsafe { *slot = value };
        Ok(())
    }
}

impl<T, A> Clone for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
}

impl<T, A> fmt::Debug for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CheckedCursorMut")
            .field(&self.core.current)
            .finish()
    }
}

/// Capability narrowing: the position was validated when the mutable cursor
/// was built or last stepped, so no re-check is needed.
impl<'v, T, A> From<CheckedCursorMut<'v, T, A>> for CheckedCursor<'v, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn from(cursor: CheckedCursorMut<'v, T, A>) -> Self {
        Self {
            core: cursor.core,
            _borrow: PhantomData,
        }
    }
}

// Comparisons are raw-position comparisons, defined within each flavor,
// across the two flavors, and against an unchecked RawPos.

impl<T, A> PartialEq for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.core.current == other.core.current
    }
}

impl<T, A> PartialOrd for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.core.current)
    }
}

impl<T, A> PartialEq for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.core.current == other.core.current
    }
}

impl<T, A> PartialOrd for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.core.current)
    }
}

impl<'a, 'b, T, A> PartialEq<CheckedCursorMut<'b, T, A>> for CheckedCursor<'a, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &CheckedCursorMut<'b, T, A>) -> bool {
        self.core.current == other.core.current
    }
}

impl<'a, 'b, T, A> PartialEq<CheckedCursor<'b, T, A>> for CheckedCursorMut<'a, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &CheckedCursor<'b, T, A>) -> bool {
        self.core.current == other.core.current
    }
}

impl<'a, 'b, T, A> PartialOrd<CheckedCursorMut<'b, T, A>> for CheckedCursor<'a, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &CheckedCursorMut<'b, T, A>) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.core.current)
    }
}

impl<'a, 'b, T, A> PartialOrd<CheckedCursor<'b, T, A>> for CheckedCursorMut<'a, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &CheckedCursor<'b, T, A>) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.core.current)
    }
}

impl<T, A> PartialEq<RawPos<T>> for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &RawPos<T>) -> bool {
        self.core.current == other.as_ptr()
    }
}

impl<T, A> PartialEq<RawPos<T>> for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn eq(&self, other: &RawPos<T>) -> bool {
        self.core.current == other.as_ptr()
    }
}

impl<T, A> PartialOrd<RawPos<T>> for CheckedCursor<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &RawPos<T>) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.as_ptr())
    }
}

impl<T, A> PartialOrd<RawPos<T>> for CheckedCursorMut<'_, T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn partial_cmp(&self, other: &RawPos<T>) -> Option<core::cmp::Ordering> {
        self.core.current.partial_cmp(&other.as_ptr())
    }
}
