// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-vec.

use thiserror::Error;

/// Checked element access named an index outside the constructed prefix.
///
/// Carries the offending index exactly as the caller passed it, plus the
/// container length at the time of the access. Raised by
/// [`at`](crate::ParapetVec::at) and [`at_mut`](crate::ParapetVec::at_mut);
/// never recovered internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for length {len}")]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// The container length when the access was made.
    pub len: usize,
}

/// A checked-cursor operation would leave or dereference outside the
/// container's live `[begin, end]` window.
///
/// The payload is a diagnostic location string naming the offending
/// operation. Raised by every checked-cursor step and by `insert`/`erase`
/// when handed a position outside the container; never recovered internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// The target position would land past `end`.
    #[error("{0} passed end")]
    PassedEnd(&'static str),

    /// The target position would land before `begin`.
    #[error("{0} before begin")]
    BeforeBegin(&'static str),

    /// Dereference of the one-past-the-end position. `end` is a legal place
    /// to stand, not a legal place to read.
    #[error("{0} dereferences end")]
    DereferencedEnd(&'static str),
}

impl RangeViolation {
    /// The diagnostic location string: which operation tripped the check.
    pub fn location(&self) -> &'static str {
        match self {
            Self::PassedEnd(op) | Self::BeforeBegin(op) | Self::DereferencedEnd(op) => op,
        }
    }
}
