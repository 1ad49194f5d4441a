// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element types for the unit tests.

// Std imports
use std::{cell::Cell, rc::Rc};

/// Counts drops and optionally makes `clone` panic after a budget runs out.
#[derive(Default)]
pub(crate) struct Ledger {
    drops: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

impl Ledger {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn drops(&self) -> usize {
        self.drops.get()
    }

    pub(crate) fn track(self: &Rc<Self>, value: i32) -> Tracked {
        Tracked {
            value,
            ledger: Rc::clone(self),
        }
    }

    /// Allows `n` more successful clones; the next one panics.
    pub(crate) fn fail_clone_after(&self, n: usize) {
        self.clone_budget.set(Some(n));
    }
}

#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) value: i32,
    ledger: Rc<Ledger>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(left) = self.ledger.clone_budget.get() {
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.ledger.clone_budget.set(Some(left - 1));
        }
        self.ledger.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").field("drops", &self.drops.get()).finish()
    }
}
