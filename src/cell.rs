//! Explicit state container shared between a view adapter and the logic.
//!
//! The adapter owns the cell; the counter and theme operations borrow it,
//! compute the next value and assign it through [`StateCell::set`].

/// A value plus the setter used to replace it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCell<T> {
    value: T,
    assignments: usize,
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> StateCell<T> {
    /// Creates a cell seeded with `initial`. Seeding does not count as an assignment.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            assignments: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.assignments += 1;
    }

    /// Number of times the setter has run since the cell was created.
    pub fn assignments(&self) -> usize {
        self.assignments
    }
}
