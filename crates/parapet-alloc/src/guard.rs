// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use crate::SlotAlloc;

/// Scoped ownership of a freshly allocated block during multi-step
/// construction.
///
/// A container that reallocates must clone every existing element into the
/// new block before adopting it. If one of those clones panics partway
/// through, the block and the elements already constructed into it must not
/// leak. `BlockGuard` owns the block for exactly that window: its `Drop`
/// destroys the constructed prefix in order and then releases the raw block.
///
/// Once every element is in place, [`release`](Self::release) defuses the
/// guard and hands the block over to the container.
///
/// # Example
///
/// ```rust
/// use parapet_alloc::{BlockGuard, HeapSlots, SlotAlloc};
///
/// let heap = HeapSlots;
/// let mut guard = BlockGuard::new(&heap, 2);
/// guard.push(1u32);
/// // Dropping the guard here destroys the one constructed element and
/// // frees the block; nothing leaks.
/// drop(guard);
/// ```
pub struct BlockGuard<'a, T, A>
where
    A: SlotAlloc<T>,
{
    alloc: &'a A,
    block: NonNull<T>,
    capacity: usize,
    built: usize,
}

impl<'a, T, A> BlockGuard<'a, T, A>
where
    A: SlotAlloc<T>,
{
    /// Allocates a block of `capacity` slots owned by the guard.
    pub fn new(alloc: &'a A, capacity: usize) -> Self {
        Self {
            alloc,
            block: alloc.allocate(capacity),
            capacity,
            built: 0,
        }
    }

    /// Constructs `value` into the next free slot.
    ///
    /// # Panics
    ///
    /// Panics if every slot is already constructed. Callers size the block
    /// up front, so hitting this is a logic error, not a growth request.
    pub fn push(&mut self, value: T) {
        assert!(self.built < self.capacity, "block is full");

        // SAFETY: built < capacity, so the slot is allocated and vacant.
        unsafe { self.alloc.construct(self.block.as_ptr().add(self.built), value) };
        self.built += 1;
    }

    /// Number of slots constructed so far.
    #[inline]
    pub fn built(&self) -> usize {
        self.built
    }

    /// Total number of slots in the guarded block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to the first slot. The first [`built`](Self::built) slots
    /// hold live elements.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.block.as_ptr()
    }

    /// Defuses the guard and hands the block over.
    ///
    /// The caller takes over both the raw block and the lifetime of the
    /// constructed prefix.
    pub fn release(self) -> NonNull<T> {
        let block = self.block;
        core::mem::forget(self);
        block
    }
}

impl<T, A> Drop for BlockGuard<'_, T, A>
where
    A: SlotAlloc<T>,
{
    fn drop(&mut self) {
        for i in 0..self.built {
            // SAFETY: slots [0, built) were constructed via push and never
            // handed over.
            unsafe { self.alloc.destroy(self.block.as_ptr().add(i)) };
        }

        // SAFETY: the block came from self.alloc.allocate(self.capacity) and
        // was never handed over.
        unsafe { self.alloc.deallocate(self.block, self.capacity) };
    }
}
