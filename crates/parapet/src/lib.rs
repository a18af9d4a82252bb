// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Parapet is a dynamic array built directly on raw slot allocation, with
//! bounds-checked cursors that answer to the container's live bounds.
//!
//! The workspace splits into three layers, re-exported here:
//!
//! - [`alloc`]: the [`SlotAlloc`] strategy (allocate/deallocate a block of
//!   slots, construct/destroy individual elements) and the [`BlockGuard`]
//!   that makes partial construction panic-safe.
//! - [`vec`]: [`ParapetVec`] itself, its unchecked [`RawPos`] positions, and
//!   the checked [`CheckedCursor`] / [`CheckedCursorMut`] pair.
//! - [`algo`]: generic [`sort`](algo::sort), [`find`](algo::find) and
//!   friends, written against the [`Cursor`] / [`CursorMut`] capability
//!   traits only.
//!
//! # Quick Start
//!
//! ```rust
//! use parapet::{Cursor, ParapetVec, RangeViolation};
//! use parapet::algo::sort_vec;
//!
//! let mut v = ParapetVec::new();
//! for word in ["c", "a", "b"] {
//!     v.push_back(word.to_string());
//! }
//!
//! sort_vec(&mut v)?;
//! assert_eq!(v.as_slice(), ["a", "b", "c"]);
//!
//! // Checked cursors refuse to leave the container.
//! let mut cur = v.cursor().to_end();
//! assert!(cur.read().is_err());
//! cur.retreat()?;
//! assert_eq!(cur.read()?, "c");
//! # Ok::<(), RangeViolation>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use parapet_algo as algo;
pub use parapet_alloc as alloc;
pub use parapet_vec as vec;

pub use parapet_alloc::{BlockGuard, HeapSlots, SlotAlloc};
pub use parapet_vec::{
    CheckedCursor, CheckedCursorMut, Cursor, CursorMut, IndexOutOfRange, ParapetVec,
    RangeViolation, RawPos,
};
