// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linear scans over a cursor range.

use parapet_vec::{Cursor, RangeViolation};

/// Finds the first element of `[begin, end)` equal to `target`.
///
/// Returns a cursor parked on the match, or `None` when the range holds no
/// equal element.
pub fn find<C>(begin: C, end: C, target: &C::Item) -> Result<Option<C>, RangeViolation>
where
    C: Cursor,
    C::Item: PartialEq,
{
    find_if(begin, end, |item| item == target)
}

/// Finds the first element of `[begin, end)` satisfying `predicate`.
pub fn find_if<C, F>(begin: C, end: C, mut predicate: F) -> Result<Option<C>, RangeViolation>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    let mut cur = begin;
    while cur != end {
        if predicate(&cur.read()?) {
            return Ok(Some(cur));
        }
        cur.advance()?;
    }
    Ok(None)
}

/// Counts the elements of `[begin, end)` equal to `target`.
pub fn count<C>(begin: C, end: C, target: &C::Item) -> Result<usize, RangeViolation>
where
    C: Cursor,
    C::Item: PartialEq,
{
    let mut cur = begin;
    let mut n = 0;
    while cur != end {
        if cur.read()? == *target {
            n += 1;
        }
        cur.advance()?;
    }
    Ok(n)
}

/// Returns `true` when `[begin, end)` is in ascending order.
///
/// Empty and single-element ranges are sorted.
pub fn is_sorted<C>(begin: C, end: C) -> Result<bool, RangeViolation>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    if begin == end {
        return Ok(true);
    }

    let mut cur = begin;
    let mut prev = cur.read()?;
    cur.advance()?;
    while cur != end {
        let next = cur.read()?;
        if next < prev {
            return Ok(false);
        }
        prev = next;
        cur.advance()?;
    }
    Ok(true)
}
