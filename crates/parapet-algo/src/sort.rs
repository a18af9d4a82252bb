// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place sorting over a mutable cursor range.

use core::cmp::Ordering;

use parapet_vec::{Cursor, CursorMut, ParapetVec, RangeViolation, SlotAlloc};

/// Sorts `[begin, end)` in ascending order.
///
/// Insertion sort: O(n²) comparisons in general, O(n) on already-sorted
/// input, and stable. Elements move by read/write through the cursors, so a
/// checked cursor pair keeps every move inside the container's live bounds.
pub fn sort<C>(begin: C, end: C) -> Result<(), RangeViolation>
where
    C: CursorMut,
    C::Item: Ord,
{
    sort_by(begin, end, C::Item::cmp)
}

/// Sorts `[begin, end)` by `compare`, ascending.
///
/// Stable: equal elements keep their relative order.
pub fn sort_by<C, F>(begin: C, end: C, mut compare: F) -> Result<(), RangeViolation>
where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    if end.distance(&begin) <= 1 {
        return Ok(());
    }

    let mut i = begin.offset(1)?;
    while i != end {
        let pivot = i.read()?;

        // Shift the sorted prefix up until the pivot's slot opens.
        let mut j = i;
        while j > begin {
            let prev = j.offset(-1)?;
            let left = prev.read()?;
            if compare(&left, &pivot) != Ordering::Greater {
                break;
            }
            j.write(left)?;
            j = prev;
        }
        j.write(pivot)?;

        i.advance()?;
    }

    Ok(())
}

/// Sorts a whole [`ParapetVec`] through its checked mutable cursor.
pub fn sort_vec<T, A>(v: &mut ParapetVec<T, A>) -> Result<(), RangeViolation>
where
    T: Clone + Ord,
    A: SlotAlloc<T>,
{
    let begin = v.cursor_mut();
    let end = begin.to_end();
    sort(begin, end)
}
