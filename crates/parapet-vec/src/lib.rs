// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Dynamic array on raw slot allocation with bounds-checked cursors.
//!
//! [`ParapetVec`] owns a block of slots acquired through
//! [`parapet_alloc::SlotAlloc`] and drives element lifetimes explicitly:
//! slots `[0, len)` are constructed, slots `[len, capacity)` are allocated
//! but uninitialized. Growth doubles from a seed of 8, and every
//! reallocation copies elements behind `parapet_alloc::BlockGuard` so a
//! panicking `Clone` leaves the container unchanged and leaks nothing.
//!
//! Two position flavors cover the checked/unchecked split:
//!
//! - [`RawPos`]: plain address arithmetic, no validation, invalidated by
//!   reallocation. The container's `insert`/`erase` take one and validate
//!   it on entry.
//! - [`CheckedCursor`] / [`CheckedCursorMut`]: a position plus a non-owning
//!   back-reference to the container, re-validated against the container's
//!   live bounds on every dereference and every step. Failures surface as
//!   [`RangeViolation`] values; checked indexing failures surface as
//!   [`IndexOutOfRange`].
//!
//! The [`Cursor`] / [`CursorMut`] traits are the capability contract that
//! generic algorithms (see `parapet-algo`) consume.
//!
//! # Example
//!
//! ```rust
//! use parapet_vec::{Cursor, ParapetVec, RangeViolation};
//!
//! let mut v = ParapetVec::new();
//! for word in ["c", "a", "b"] {
//!     v.push_back(word.to_string());
//! }
//!
//! let cur = v.cursor();
//! assert_eq!(cur.read().unwrap(), "c");
//! assert_eq!(cur.to_end().distance(&cur.to_begin()), 3);
//!
//! // end is a legal position but an illegal read.
//! let at_end = cur.to_end();
//! assert!(matches!(
//!     at_end.read(),
//!     Err(RangeViolation::DereferencedEnd(_))
//! ));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod checked_cursor;
mod error;
mod parapet_vec;
mod raw_pos;
mod traits;

#[cfg(test)]
mod tests;

pub use checked_cursor::{CheckedCursor, CheckedCursorMut};
pub use error::{IndexOutOfRange, RangeViolation};
pub use parapet_vec::ParapetVec;
pub use raw_pos::RawPos;
pub use traits::{Cursor, CursorMut};

// The allocator surface travels with the container types that are generic
// over it.
pub use parapet_alloc::{HeapSlots, SlotAlloc};
