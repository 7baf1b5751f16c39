//! Counting live values to detect leaked or prematurely released elements.

use std::cell::Cell;
use std::rc::Rc;

/// Counts the [`Tracked`] values it created that have not been dropped yet.
#[derive(Debug, Clone, Default)]
pub struct DropTracker {
    alive: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value`; the tracker counts it as alive until it is dropped.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.alive.set(self.alive.get() + 1);
        Tracked {
            value,
            alive: self.alive.clone(),
        }
    }

    /// Number of tracked values currently alive.
    pub fn alive(&self) -> usize {
        self.alive.get()
    }
}

/// A value registered with a [`DropTracker`].
///
/// Deliberately not `Clone`: wrap it in `Rc` to share one element between
/// several groups.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    alive: Rc<Cell<usize>>,
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.alive.set(self.alive.get() - 1);
    }
}
