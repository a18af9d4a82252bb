// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure-injection coverage: a `Clone` panic mid-operation must destroy
//! exactly the elements the operation had constructed, and must never leave
//! the container holding a half-built block.

use std::panic::{catch_unwind, AssertUnwindSafe};

use parapet_alloc::{FragileItem, FragileLedger};

use crate::ParapetVec;

// =============================================================================
// strong guarantee: reserve / clone / with_size
// =============================================================================

#[test]
fn test_reserve_unwinds_to_unchanged_container() {
    let ledger = FragileLedger::new();
    let mut v = ParapetVec::new();
    for i in 0..3 {
        v.push_back(FragileItem::new(i, &ledger));
    }

    ledger.arm(2);
    let outcome = catch_unwind(AssertUnwindSafe(|| v.reserve(100)));
    assert!(outcome.is_err());

    // One clone landed in the new block before the panic; the guard
    // destroyed it and released the block.
    assert_eq!(ledger.drops(), 1);
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 8);
    for i in 0..3 {
        assert_eq!(v.at(i as usize).unwrap().value, i);
    }

    drop(v);
    assert_eq!(ledger.drops(), 4);
}

#[test]
fn test_with_size_unwinds_without_leaking() {
    let ledger = FragileLedger::new();
    let item = FragileItem::new(7, &ledger);

    ledger.arm(3);
    let outcome = catch_unwind(AssertUnwindSafe(|| ParapetVec::with_size(5, item)));
    assert!(outcome.is_err());

    // Two built clones torn down by the guard, plus the moved-in template.
    assert_eq!(ledger.clones(), 2);
    assert_eq!(ledger.drops(), 3);
}

#[test]
fn test_clone_unwinds_to_untouched_source() {
    let ledger = FragileLedger::new();
    let mut v = ParapetVec::new();
    for i in 0..4 {
        v.push_back(FragileItem::new(i, &ledger));
    }

    ledger.arm(3);
    let outcome = catch_unwind(AssertUnwindSafe(|| v.clone()));
    assert!(outcome.is_err());

    assert_eq!(ledger.drops(), 2);
    assert_eq!(v.len(), 4);
    for i in 0..4 {
        assert_eq!(v.at(i as usize).unwrap().value, i);
    }

    // Disarmed, the same copy succeeds.
    let copy = v.clone();
    assert_eq!(copy, v);
}

#[test]
fn test_clone_from_reallocating_unwinds_to_unchanged_destination() {
    let ledger = FragileLedger::new();
    let mut dst = ParapetVec::with_size(1, FragileItem::new(9, &ledger));
    let mut src = ParapetVec::new();
    for i in 0..3 {
        src.push_back(FragileItem::new(i, &ledger));
    }

    let drops_before = ledger.drops();
    ledger.arm(2);
    let outcome = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));
    assert!(outcome.is_err());

    assert_eq!(ledger.drops(), drops_before + 1);
    assert_eq!(dst.len(), 1);
    assert_eq!(dst.capacity(), 1);
    assert_eq!(dst.at(0).unwrap().value, 9);
    assert_eq!(src.len(), 3);
}

// =============================================================================
// basic guarantee: in-place assignment paths stay droppable
// =============================================================================

#[test]
fn test_clone_from_in_place_unwind_leaves_valid_prefix() {
    let ledger = FragileLedger::new();
    let mut dst = ParapetVec::new();
    for i in 10..13 {
        dst.push_back(FragileItem::new(i, &ledger));
    }
    let mut src = ParapetVec::new();
    for i in 0..2 {
        src.push_back(FragileItem::new(i, &ledger));
    }

    ledger.arm(2);
    let outcome = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));
    assert!(outcome.is_err());

    // Slot 0 was reassigned before the panic; the rest keep their old
    // values, and every slot in [0, len) is still a live element.
    assert_eq!(dst.len(), 3);
    assert_eq!(dst.at(0).unwrap().value, 0);
    assert_eq!(dst.at(1).unwrap().value, 11);
    assert_eq!(dst.at(2).unwrap().value, 12);

    let drops_before = ledger.drops();
    drop(dst);
    assert_eq!(ledger.drops(), drops_before + 3);
}

// =============================================================================
// lifecycle accounting
// =============================================================================

#[test]
fn test_erase_conserves_element_count() {
    let ledger = FragileLedger::new();
    let mut v = ParapetVec::new();
    for i in 0..4 {
        v.push_back(FragileItem::new(i, &ledger));
    }

    let clones_before = ledger.clones();
    let drops_before = ledger.drops();
    v.erase(v.begin().add(1)).unwrap();

    // Net one element fewer, whatever the shuffle cost.
    let made = ledger.clones() - clones_before;
    let gone = ledger.drops() - drops_before;
    assert_eq!(gone, made + 1);
    assert_eq!(v.len(), 3);
}

#[test]
fn test_no_leaks_across_mixed_operations() {
    let ledger = FragileLedger::new();
    let mut created = 0;
    {
        let mut v = ParapetVec::new();
        for i in 0..10 {
            v.push_back(FragileItem::new(i, &ledger));
            created += 1;
        }
        v.push_front(FragileItem::new(-1, &ledger));
        created += 1;
        v.insert(v.begin().add(5), FragileItem::new(-2, &ledger))
            .unwrap();
        created += 1;
        v.erase(v.begin().add(3)).unwrap();
        v.resize(4, FragileItem::new(0, &ledger));
        created += 1;

        let copy = v.clone();
        drop(copy);
    }

    // Every construction was either a fresh item or a recorded clone, and
    // each one must have been destroyed exactly once.
    assert_eq!(ledger.drops(), created + ledger.clones());
}
