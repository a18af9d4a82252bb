// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::alloc::{alloc, dealloc, handle_alloc_error};

/// A swappable strategy for acquiring raw slots and managing element
/// lifetimes inside them.
///
/// `allocate`/`deallocate` move blocks of uninitialized slots in and out of
/// the strategy; `construct`/`destroy` begin and end the lifetime of a single
/// element within an already-allocated slot. The four operations are
/// deliberately independent: a container tracks which prefix of its block is
/// live and drives construct/destroy itself.
pub trait SlotAlloc<T> {
    /// Acquires a block of `n` uninitialized slots.
    ///
    /// `n == 0` returns a dangling pointer without touching the underlying
    /// allocator. Allocation failure does not return; it is reported through
    /// the allocation primitive's own failure path.
    ///
    /// # Panics
    ///
    /// Panics if `T` is a zero-sized type. Slot blocks are address-indexed
    /// and zero-sized elements have no addressable slots.
    fn allocate(&self, n: usize) -> NonNull<T>;

    /// Releases a block previously returned by [`allocate`](Self::allocate)
    /// with the same `n`.
    ///
    /// Never runs destructors; every slot still holding a live element must
    /// be passed to [`destroy`](Self::destroy) first.
    ///
    /// # Safety
    ///
    /// `block` must have come from `allocate(n)` on this same strategy and
    /// must not be used afterwards.
    unsafe fn deallocate(&self, block: NonNull<T>, n: usize);

    /// Begins the lifetime of an element by placing `value` into `slot`.
    ///
    /// The previous contents of the slot are treated as uninitialized and
    /// are not dropped.
    ///
    /// # Safety
    ///
    /// `slot` must point into an allocated block and must not currently hold
    /// a live element.
    unsafe fn construct(&self, slot: *mut T, value: T) {
        // SAFETY: the caller guarantees the slot is allocated and vacant.
        unsafe { ptr::write(slot, value) }
    }

    /// Ends the lifetime of the element in `slot`, leaving the slot
    /// allocated but uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live element constructed via
    /// [`construct`](Self::construct) (or equivalent) and not yet destroyed.
    unsafe fn destroy(&self, slot: *mut T) {
        // SAFETY: the caller guarantees the slot holds a live element.
        unsafe { ptr::drop_in_place(slot) }
    }
}

/// The default slot strategy: blocks come from the global heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapSlots;

impl<T> SlotAlloc<T> for HeapSlots {
    fn allocate(&self, n: usize) -> NonNull<T> {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized element types have no slots"
        );

        if n == 0 {
            return NonNull::dangling();
        }

        let layout = Layout::array::<T>(n).expect("slot block exceeds the address space");

        // SAFETY: the layout has non-zero size (n > 0 and T is not zero-sized).
        let raw = unsafe { alloc(layout) };

        match NonNull::new(raw.cast::<T>()) {
            Some(block) => block,
            None => handle_alloc_error(layout),
        }
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        if n == 0 {
            return;
        }

        // Same n as the matching allocate call, so the layout cannot overflow.
        let layout = Layout::array::<T>(n).expect("slot block exceeds the address space");

        // SAFETY: the caller guarantees block came from allocate(n), which
        // used this exact layout.
        unsafe { dealloc(block.as_ptr().cast::<u8>(), layout) }
    }
}
