// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::mem;
use core::ptr::NonNull;
use core::slice;

use parapet_alloc::{BlockGuard, HeapSlots, SlotAlloc};

use crate::checked_cursor::{CheckedCursor, CheckedCursorMut};
use crate::error::{IndexOutOfRange, RangeViolation};
use crate::raw_pos::RawPos;

/// A dynamic array built directly on raw slot allocation.
///
/// The backing block holds `capacity` slots of which the prefix `[0, len)`
/// is constructed; slots `[len, capacity)` are allocated but uninitialized.
/// Construct and destroy are driven explicitly through the [`SlotAlloc`]
/// strategy, never fused with block acquisition. Growth doubles from a seed
/// capacity of 8, and every reallocation copies elements behind a
/// [`BlockGuard`] so a panicking `Clone` mid-copy leaks nothing and leaves
/// the container unchanged.
///
/// Element movement is copy-based throughout (`T: Clone`); there is no
/// small-buffer optimization and no thread-safety protocol beyond `Send`/
/// `Sync` following the element type.
///
/// Positions come in two flavors: [`RawPos`] (plain address arithmetic, no
/// checking, invalidated by reallocation) and the checked cursors obtained
/// via [`cursor`](Self::cursor) / [`cursor_mut`](Self::cursor_mut), which
/// validate every step against the container's live bounds.
///
/// # Example
///
/// ```rust
/// use parapet_vec::ParapetVec;
///
/// let mut v = ParapetVec::new();
/// v.push_back(3);
/// v.push_front(1);
/// v.insert(v.begin().add(1), 2).unwrap();
///
/// assert_eq!(v.as_slice(), [1, 2, 3]);
/// assert_eq!(*v.at(2).unwrap(), 3);
/// assert!(v.at(3).is_err());
/// ```
pub struct ParapetVec<T, A = HeapSlots>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    elem: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,
}

// SAFETY: the container exclusively owns its block; moving it across threads
// moves ownership of the elements with it.
unsafe impl<T, A> Send for ParapetVec<T, A>
where
    T: Clone + Send,
    A: SlotAlloc<T> + Send,
{
}

// SAFETY: shared access only hands out shared references to elements.
unsafe impl<T, A> Sync for ParapetVec<T, A>
where
    T: Clone + Sync,
    A: SlotAlloc<T> + Sync,
{
}

impl<T> ParapetVec<T, HeapSlots>
where
    T: Clone,
{
    /// Creates an empty container. No block is allocated until the first
    /// growth.
    pub fn new() -> Self {
        Self::with_alloc(HeapSlots)
    }

    /// Creates a container of exactly `n` slots, each constructed as a clone
    /// of `value`.
    pub fn with_size(n: usize, value: T) -> Self {
        Self::with_size_in(n, value, HeapSlots)
    }
}

impl<T> ParapetVec<T, HeapSlots>
where
    T: Clone + Default,
{
    /// Creates a container of exactly `n` slots filled with `T::default()`.
    pub fn with_default(n: usize) -> Self {
        Self::with_size(n, T::default())
    }
}

impl<T, A> ParapetVec<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    /// Capacity seeded on the first growth of an unallocated container.
    pub const SEED_CAPACITY: usize = 8;

    /// Creates an empty container using `alloc` as its slot strategy.
    pub fn with_alloc(alloc: A) -> Self {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized element types have no slots"
        );

        Self {
            elem: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
        }
    }

    /// Creates a container of exactly `n` clones of `value` using `alloc`.
    ///
    /// Built behind a [`BlockGuard`]: a panicking clone mid-fill destroys
    /// the partial prefix and releases the block before propagating.
    pub fn with_size_in(n: usize, value: T, alloc: A) -> Self {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized element types have no slots"
        );

        let mut guard = BlockGuard::new(&alloc, n);
        for _ in 0..n {
            guard.push(value.clone());
        }
        let elem = guard.release();

        Self {
            elem,
            len: n,
            cap: n,
            alloc,
        }
    }

    /// Number of constructed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The position of the first element.
    #[inline]
    pub fn begin(&self) -> RawPos<T> {
        RawPos::new(self.elem.as_ptr())
    }

    /// The one-past-the-end position. Legal to hold, illegal to dereference.
    #[inline]
    pub fn end(&self) -> RawPos<T> {
        RawPos::new(self.elem.as_ptr().wrapping_add(self.len))
    }

    /// Checked access: fails with [`IndexOutOfRange`] carrying `index` when
    /// it is not inside the constructed prefix.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: index < len, so the slot holds a live element.
        Ok(unsafe { &*self.elem.as_ptr().add(index) })
    }

    /// Checked mutable access; same contract as [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: index < len, so the slot holds a live element.
        Ok(unsafe { &mut *self.elem.as_ptr().add(index) })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < len.
        unsafe { &*self.elem.as_ptr().add(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < len.
        unsafe { &mut *self.elem.as_ptr().add(index) }
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.at(0).ok()
    }

    /// The first element mutably, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0).ok()
    }

    /// The last element, if any.
    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            n => self.at(n - 1).ok(),
        }
    }

    /// The last element mutably, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len {
            0 => None,
            n => self.at_mut(n - 1).ok(),
        }
    }

    /// The constructed prefix as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is constructed; for len == 0 the dangling pointer
        // is valid for an empty slice.
        unsafe { slice::from_raw_parts(self.elem.as_ptr(), self.len) }
    }

    /// The constructed prefix as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.elem.as_ptr(), self.len) }
    }

    /// Grows the block to at least `new_cap` slots. Never shrinks: requests
    /// at or below the current capacity are a no-op.
    ///
    /// On growth, every element is clone-constructed in order into the new
    /// block behind a [`BlockGuard`], then the old elements are destroyed
    /// and the old block released. A panicking clone unwinds the partial
    /// copy and leaves the container unchanged.
    ///
    /// Reallocation invalidates every outstanding [`RawPos`] into this
    /// container.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }

        let mut guard = BlockGuard::new(&self.alloc, new_cap);
        for i in 0..self.len {
            // SAFETY: i < len, so the slot holds a live element.
            guard.push(unsafe { (*self.elem.as_ptr().add(i)).clone() });
        }

        // Every clone landed; tear down the old storage and adopt the block.
        unsafe {
            // SAFETY: [0, len) is constructed and the block holds cap slots
            // from this same strategy.
            for i in 0..self.len {
                self.alloc.destroy(self.elem.as_ptr().add(i));
            }
            self.alloc.deallocate(self.elem, self.cap);
        }

        self.elem = guard.release();
        self.cap = new_cap;
    }

    /// Appends a clone-constructed `value` at the back, growing if full.
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one();

        // SAFETY: grow_for_one leaves len < cap; slot len is vacant.
        unsafe { self.alloc.construct(self.elem.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Inserts `value` at the front, shifting every element one slot toward
    /// the end. O(len) per call: the cost of front insertion into an array,
    /// not a defect.
    pub fn push_front(&mut self, value: T) {
        if self.cap == 0 || self.len == 0 {
            self.push_back(value);
            return;
        }
        if self.len == self.cap {
            self.reserve(2 * self.cap);
        }

        // Duplicate-construct the back element into the first free slot,
        // then shift-assign down through the row. The duplicate is what
        // makes slot len assignable rather than vacant.
        unsafe {
            // SAFETY: len >= 1 and len < cap after the growth above.
            let dup = (*self.elem.as_ptr().add(self.len - 1)).clone();
            self.alloc.construct(self.elem.as_ptr().add(self.len), dup);
        }

        self.move_back(0, value);
        self.len += 1;
    }

    /// Inserts `value` before `pos`, returning the position of the inserted
    /// element.
    ///
    /// `pos` may be anywhere in `[begin, end]`; anything else fails with a
    /// [`RangeViolation`]. The index distance from `begin` is captured
    /// before any reallocation, since growth invalidates `pos` itself.
    pub fn insert(&mut self, pos: RawPos<T>, value: T) -> Result<RawPos<T>, RangeViolation> {
        // Must happen before reserve: reallocation moves begin.
        let index = self.position_index(pos, "ParapetVec::insert")?;

        if self.cap == 0 {
            self.reserve(Self::SEED_CAPACITY);
        } else if self.len == self.cap {
            self.reserve(2 * self.cap);
        }

        if self.len == 0 {
            // SAFETY: cap >= SEED_CAPACITY > 0 and slot 0 is vacant.
            unsafe { self.alloc.construct(self.elem.as_ptr(), value) };
            self.len = 1;
            return Ok(self.begin());
        }

        // Duplicate-construct the back into the new last slot so the shift
        // loop below has a constructed target for every assignment.
        unsafe {
            // SAFETY: len >= 1 and len < cap after the growth above.
            let dup = (*self.elem.as_ptr().add(self.len - 1)).clone();
            self.alloc.construct(self.elem.as_ptr().add(self.len), dup);
        }
        self.len += 1;

        self.move_back(index, value);
        Ok(self.begin().add(index))
    }

    /// Removes the element at `pos`, shifting later elements one slot toward
    /// `begin`. Returns the position of the element that followed the erased
    /// one (or `end`). `erase(end)` is a no-op returning `pos`.
    ///
    /// `pos` outside `[begin, end]` fails with a [`RangeViolation`].
    pub fn erase(&mut self, pos: RawPos<T>) -> Result<RawPos<T>, RangeViolation> {
        let index = self.position_index(pos, "ParapetVec::erase")?;
        if index == self.len {
            return Ok(pos);
        }

        let base = self.elem.as_ptr();
        for i in index + 1..self.len {
            // SAFETY: slots [index, len) are constructed; shift-assign each
            // later element one slot down.
            unsafe { *base.add(i - 1) = (*base.add(i)).clone() };
        }

        // SAFETY: the last slot now duplicates its predecessor.
        unsafe { self.alloc.destroy(base.add(self.len - 1)) };
        self.len -= 1;

        Ok(self.begin().add(index))
    }

    /// Resizes to exactly `new_len` elements: grows by appending clones of
    /// `value`, shrinks by destroying the tail.
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.reserve(new_len);

        while self.len < new_len {
            // SAFETY: len < new_len <= cap, so slot len is vacant.
            unsafe {
                self.alloc
                    .construct(self.elem.as_ptr().add(self.len), value.clone());
            }
            self.len += 1;
        }
        while self.len > new_len {
            // SAFETY: slot len - 1 holds a live element.
            unsafe { self.alloc.destroy(self.elem.as_ptr().add(self.len - 1)) };
            self.len -= 1;
        }
    }

    /// A checked cursor at `begin`. Derive other positions from it via
    /// [`to_end`](CheckedCursor::to_end) and offsets.
    pub fn cursor(&self) -> CheckedCursor<'_, T, A> {
        CheckedCursor::at_begin(self)
    }

    /// A checked mutable cursor at `begin`. Takes the container exclusively
    /// for the cursor's lifetime; copies of the cursor share that window.
    pub fn cursor_mut(&mut self) -> CheckedCursorMut<'_, T, A> {
        CheckedCursorMut::at_begin(self)
    }

    /// A checked cursor validated at `pos` on construction.
    pub fn try_cursor_at(&self, pos: RawPos<T>) -> Result<CheckedCursor<'_, T, A>, RangeViolation> {
        CheckedCursor::at_position(self, pos)
    }

    /// A checked mutable cursor validated at `pos` on construction.
    pub fn try_cursor_mut_at(
        &mut self,
        pos: RawPos<T>,
    ) -> Result<CheckedCursorMut<'_, T, A>, RangeViolation> {
        CheckedCursorMut::at_position(self, pos)
    }

    fn grow_for_one(&mut self) {
        if self.cap == 0 {
            self.reserve(Self::SEED_CAPACITY);
        } else if self.len == self.cap {
            self.reserve(2 * self.cap);
        }
    }

    /// Validates `pos` against `[begin, end]` and converts it to an index.
    fn position_index(&self, pos: RawPos<T>, op: &'static str) -> Result<usize, RangeViolation> {
        let d = pos.distance(self.begin());
        if d < 0 {
            return Err(RangeViolation::BeforeBegin(op));
        }
        let index = d as usize;
        if index > self.len {
            return Err(RangeViolation::PassedEnd(op));
        }
        Ok(index)
    }

    /// Shifts `[index, ..)` one slot toward the end and assigns `value` at
    /// `index`. Callers have already placed a constructed element in the
    /// highest slot the loop assigns into.
    fn move_back(&mut self, index: usize, value: T) {
        if self.len == 0 {
            return;
        }

        let base = self.elem.as_ptr();
        let mut i = self.len - 1;
        while i > index {
            // SAFETY: slots [index, len) are constructed.
            unsafe { *base.add(i) = (*base.add(i - 1)).clone() };
            i -= 1;
        }

        // SAFETY: slot index is constructed.
        unsafe { *base.add(index) = value };
    }
}

impl<T, A> Clone for ParapetVec<T, A>
where
    T: Clone,
    A: SlotAlloc<T> + Clone,
{
    /// Allocates exactly `self.len` slots and clone-constructs each element
    /// behind a [`BlockGuard`]: a mid-copy panic releases the partial block
    /// and leaves the source untouched.
    fn clone(&self) -> Self {
        let alloc = self.alloc.clone();

        let mut guard = BlockGuard::new(&alloc, self.len);
        for i in 0..self.len {
            // SAFETY: i < len, so the slot holds a live element.
            guard.push(unsafe { (*self.elem.as_ptr().add(i)).clone() });
        }
        let elem = guard.release();

        Self {
            elem,
            len: self.len,
            cap: self.len,
            alloc,
        }
    }

    /// Copy assignment. Reuses the existing block when `other` fits in the
    /// current capacity (assign the overlap, construct the excess, destroy
    /// the surplus); otherwise adopts a fresh block of exactly `other.len`
    /// slots built behind a [`BlockGuard`]. Self-assignment is a no-op.
    fn clone_from(&mut self, other: &Self) {
        if core::ptr::eq(self, other) {
            return;
        }

        if other.len <= self.cap {
            let dst = self.elem.as_ptr();
            let src = other.elem.as_ptr();

            let overlap = self.len.min(other.len);
            for i in 0..overlap {
                // SAFETY: both slots hold live elements.
                unsafe { *dst.add(i) = (*src.add(i)).clone() };
            }
            for i in self.len..other.len {
                // SAFETY: dst slot i is vacant (i >= self.len) and allocated
                // (i < other.len <= cap); src slot i is live.
                unsafe { self.alloc.construct(dst.add(i), (*src.add(i)).clone()) };
            }
            for i in other.len..self.len {
                // SAFETY: dst slot i holds a live element no longer needed.
                unsafe { self.alloc.destroy(dst.add(i)) };
            }

            self.len = other.len;
            return;
        }

        let mut guard = BlockGuard::new(&self.alloc, other.len);
        for i in 0..other.len {
            // SAFETY: i < other.len, so the slot holds a live element.
            guard.push(unsafe { (*other.elem.as_ptr().add(i)).clone() });
        }

        unsafe {
            // SAFETY: [0, len) is constructed and the old block holds cap
            // slots from this same strategy.
            for i in 0..self.len {
                self.alloc.destroy(self.elem.as_ptr().add(i));
            }
            self.alloc.deallocate(self.elem, self.cap);
        }

        self.elem = guard.release();
        self.len = other.len;
        self.cap = other.len;
    }
}

impl<T, A> Drop for ParapetVec<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn drop(&mut self) {
        unsafe {
            // SAFETY: [0, len) is constructed and the block holds cap slots
            // from this same strategy.
            for i in 0..self.len {
                self.alloc.destroy(self.elem.as_ptr().add(i));
            }
            self.alloc.deallocate(self.elem, self.cap);
        }
    }
}

impl<T, A> Default for ParapetVec<T, A>
where
    T: Clone,
    A: SlotAlloc<T> + Default,
{
    fn default() -> Self {
        Self::with_alloc(A::default())
    }
}

impl<T, A> fmt::Debug for ParapetVec<T, A>
where
    T: Clone,
    A: SlotAlloc<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParapetVec")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .finish_non_exhaustive()
    }
}

impl<T, A, B> PartialEq<ParapetVec<T, B>> for ParapetVec<T, A>
where
    T: Clone + PartialEq,
    A: SlotAlloc<T>,
    B: SlotAlloc<T>,
{
    fn eq(&self, other: &ParapetVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A> Eq for ParapetVec<T, A>
where
    T: Clone + Eq,
    A: SlotAlloc<T>,
{
}
