use crate::collections::ArrayIndexedList;
use crate::error::{Error, Result};

/// Last-in-first-out adapter over an `ArrayIndexedList`. Holds no state of
/// its own beyond the wrapped sequence.
pub struct Stack<T> {
    elements: ArrayIndexedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            elements: ArrayIndexedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.elements.add(value);
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyStack);
        }
        self.elements.remove(self.elements.len() - 1)
    }

    /// Returns the most recently pushed element without removing it.
    pub fn peek(&self) -> Result<&T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyStack);
        }
        self.elements.get(self.elements.len() - 1)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}
