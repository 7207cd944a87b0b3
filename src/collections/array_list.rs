use crate::collections::Collection;
use crate::error::{Error, Result};

/// Growable array with the same indexed operation set as
/// `LinkedIndexedList`. Backs the `Stack` adapter.
pub struct ArrayIndexedList<T> {
    elements: Vec<T>,
}

impl<T> ArrayIndexedList<T> {
    pub fn new() -> Self {
        ArrayIndexedList {
            elements: Vec::new(),
        }
    }

    pub fn from_collection(other: &dyn Collection<T>) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut list = ArrayIndexedList::new();
        list.add_all(other);
        list
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add(&mut self, value: T) {
        self.elements.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        if position > self.elements.len() {
            return Err(Error::IndexOutOfRange {
                index: position,
                len: self.elements.len(),
            });
        }
        self.elements.insert(position, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.elements.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> Default for ArrayIndexedList<T> {
    fn default() -> Self {
        ArrayIndexedList::new()
    }
}

impl<T: PartialEq> Collection<T> for ArrayIndexedList<T> {
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn add(&mut self, value: T) {
        self.elements.push(value);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.elements.iter())
    }
}
