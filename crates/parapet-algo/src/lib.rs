// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic algorithms over the [`Cursor`](parapet_vec::Cursor) /
//! [`CursorMut`](parapet_vec::CursorMut) capability contract.
//!
//! Every routine takes a half-open `[begin, end)` cursor pair and is written
//! against the traits only, never against a concrete cursor type. Bounds
//! violations surface as [`RangeViolation`](parapet_vec::RangeViolation)
//! values propagated from the cursors themselves; handing a routine a
//! well-formed pair over one container means it cannot step outside it.
//!
//! # Example
//!
//! ```rust
//! use parapet_algo::{is_sorted, sort_vec};
//! use parapet_vec::ParapetVec;
//!
//! let mut v = ParapetVec::new();
//! for word in ["c", "a", "b"] {
//!     v.push_back(word.to_string());
//! }
//!
//! sort_vec(&mut v).unwrap();
//! assert_eq!(v.as_slice(), ["a", "b", "c"]);
//!
//! let cur = v.cursor();
//! assert!(is_sorted(cur, cur.to_end()).unwrap());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod search;
mod sort;

#[cfg(test)]
mod tests;

pub use search::{count, find, find_if, is_sorted};
pub use sort::{sort, sort_by, sort_vec};
