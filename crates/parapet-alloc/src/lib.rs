// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot allocation primitives for parapet containers.
//!
//! This crate separates the two halves of element storage that `Vec`-style
//! containers usually fuse together:
//!
//! - **allocate / deallocate**: acquiring and releasing a block of
//!   uninitialized slots, via the [`SlotAlloc`] trait (default strategy:
//!   [`HeapSlots`], the global heap).
//! - **construct / destroy**: placing a value into one slot and tearing it
//!   down again, independent of the block's lifetime.
//!
//! A container built on this split owns "allocated capacity, of which a
//! size-prefix is live objects". Nothing here assumes zero-initialization.
//!
//! [`BlockGuard`] covers the hard part: during a multi-step copy into a fresh
//! block, a panicking `Clone` must not leak the block or the elements already
//! constructed into it. The guard tracks the constructed-element count and
//! unwinds exactly that prefix before releasing the raw block.
//!
//! # Example
//!
//! ```rust
//! use parapet_alloc::{BlockGuard, HeapSlots, SlotAlloc};
//!
//! let heap = HeapSlots;
//! let mut guard = BlockGuard::new(&heap, 4);
//! guard.push("a".to_string());
//! guard.push("b".to_string());
//!
//! // Hand the block over; the caller now owns 2 constructed slots out of 4.
//! let block = guard.release();
//! // SAFETY: slots [0, 2) were constructed above and the block holds 4 slots.
//! unsafe {
//!     heap.destroy(block.as_ptr());
//!     heap.destroy(block.as_ptr().add(1));
//!     heap.deallocate(block, 4);
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod guard;
mod slots;

#[cfg(any(test, feature = "test-utils"))]
mod fragile;

#[cfg(test)]
mod tests;

pub use guard::BlockGuard;
pub use slots::{HeapSlots, SlotAlloc};

#[cfg(any(test, feature = "test-utils"))]
pub use fragile::{FragileItem, FragileLedger};
