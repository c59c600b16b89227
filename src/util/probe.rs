//! Element types for observing how a collection treats its contents in tests.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Increments a shared counter when dropped, so tests can check when the last handle to an
/// element is released.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A value that orders by `key` alone, with `tag` telling apart elements that compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: i32,
    pub tag: char,
}

impl Tagged {
    pub const fn new(key: i32, tag: char) -> Tagged {
        Tagged { key, tag }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
