// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection for exercising partial-construction cleanup.
//!
//! Only available with the `test-utils` feature. [`FragileItem`] is an
//! element type whose `Clone` can be armed to panic on the n-th call, with a
//! shared [`FragileLedger`] counting every clone and drop. Tests use the
//! ledger to prove that a partially completed copy destroyed exactly the
//! elements it had constructed.

use core::cell::Cell;

use alloc::rc::Rc;

/// Shared bookkeeping for a family of [`FragileItem`]s.
#[derive(Debug, Default)]
pub struct FragileLedger {
    clones_until_panic: Cell<Option<usize>>,
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl FragileLedger {
    /// Creates a fresh, disarmed ledger.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Arms the ledger: the `nth` subsequent clone call (1-based) panics
    /// before constructing anything.
    pub fn arm(&self, nth: usize) {
        assert!(nth > 0, "the first clone to fail is 1-based");
        self.clones_until_panic.set(Some(nth));
    }

    /// Disarms the ledger; clones succeed again.
    pub fn disarm(&self) {
        self.clones_until_panic.set(None);
    }

    /// Number of successful clone calls recorded so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    /// Number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element whose `Clone` can be made to panic via its [`FragileLedger`].
#[derive(Debug)]
pub struct FragileItem {
    /// Payload, used by tests for equality checks.
    pub value: i32,
    ledger: Rc<FragileLedger>,
}

impl FragileItem {
    /// Creates an item reporting to `ledger`.
    pub fn new(value: i32, ledger: &Rc<FragileLedger>) -> Self {
        Self {
            value,
            ledger: Rc::clone(ledger),
        }
    }
}

impl Clone for FragileItem {
    fn clone(&self) -> Self {
        if let Some(remaining) = self.ledger.clones_until_panic.get() {
            if remaining <= 1 {
                self.ledger.clones_until_panic.set(None);
                panic!("injected clone failure");
            }
            self.ledger.clones_until_panic.set(Some(remaining - 1));
        }

        self.ledger.clones.set(self.ledger.clones.get() + 1);
        Self {
            value: self.value,
            ledger: Rc::clone(&self.ledger),
        }
    }
}

impl Drop for FragileItem {
    fn drop(&mut self) {
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}

impl PartialEq for FragileItem {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FragileItem {}
