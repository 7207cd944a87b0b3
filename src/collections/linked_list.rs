use crate::collections::Collection;
use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    previous: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked list with index access. Nodes live in a slab (`nodes`) and
/// link to each other by slot index, so back-links cannot dangle after a
/// removal; freed slots are recycled through `free`.
///
/// Index lookups walk from whichever end of the chain is closer, which halves
/// the worst-case traversal length compared to scanning from the head.
pub struct LinkedIndexedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedIndexedList<T> {
    pub fn new() -> Self {
        LinkedIndexedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Copies every element of `other` into a fresh list, in iteration order.
    pub fn from_collection(other: &dyn Collection<T>) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut list = LinkedIndexedList::new();
        list.add_all(other);
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends at the end of the list.
    pub fn add(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        let (slot, _) = self.locate(index);
        Ok(&self.node(slot).value)
    }

    /// Inserts `value` so that it occupies `position` afterwards, shifting
    /// subsequent elements up by one index. `position == len()` appends.
    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        if position > self.len {
            return Err(Error::IndexOutOfRange {
                index: position,
                len: self.len,
            });
        }

        if position == self.len {
            // covers the empty list and plain appends
            self.add(value);
        } else if position == 0 {
            let old_head = self.head.unwrap();
            let slot = self.alloc(Node {
                value,
                previous: None,
                next: Some(old_head),
            });
            self.node_mut(old_head).previous = Some(slot);
            self.head = Some(slot);
            self.len += 1;
        } else {
            // interior: the new node takes over `position`
            let (at, _) = self.locate(position);
            let before = self.node(at).previous.unwrap();
            let slot = self.alloc(Node {
                value,
                previous: Some(before),
                next: Some(at),
            });
            self.node_mut(before).next = Some(slot);
            self.node_mut(at).previous = Some(slot);
            self.len += 1;
        }
        Ok(())
    }

    /// Unlinks the node at `index` and returns its value.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let (slot, _) = self.locate(index);
        let node = self.nodes[slot].take().expect("linked slot holds a node");
        self.free.push(slot);

        match node.previous {
            Some(previous) => self.node_mut(previous).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).previous = node.previous,
            None => self.tail = node.previous,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Index of the first element equal to `value`, scanning head to tail.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Finds the slot holding `index` and reports how many links were
    /// followed to reach it. Walks forward from the head when the index sits
    /// in the first half of the list, backward from the tail otherwise.
    /// Callers must have bounds-checked `index`.
    pub(crate) fn locate(&self, index: usize) -> (usize, usize) {
        if index <= (self.len - 1) / 2 {
            let mut slot = self.head.unwrap();
            for _ in 0..index {
                slot = self.node(slot).next.unwrap();
            }
            (slot, index)
        } else {
            let hops = self.len - 1 - index;
            let mut slot = self.tail.unwrap();
            for _ in 0..hops {
                slot = self.node(slot).previous.unwrap();
            }
            (slot, hops)
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        self.nodes[slot].as_ref().expect("linked slot holds a node")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        self.nodes[slot].as_mut().expect("linked slot holds a node")
    }
}

impl<T> Default for LinkedIndexedList<T> {
    fn default() -> Self {
        LinkedIndexedList::new()
    }
}

impl<T: PartialEq> Collection<T> for LinkedIndexedList<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) {
        LinkedIndexedList::add(self, value)
    }

    fn clear(&mut self) {
        LinkedIndexedList::clear(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(LinkedIndexedList::iter(self))
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Option<Node<T>>],
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|slot| {
            let node = self.nodes[slot].as_ref().expect("linked slot holds a node");
            self.next = node.next;
            &node.value
        })
    }
}
