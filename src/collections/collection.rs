/// Minimal contract shared by the collection types in this crate.
///
/// Element types are non-nullable by construction, so there is no "null
/// element" precondition to check anywhere: if you hold a `T`, it is storable.
pub trait Collection<T: PartialEq> {
    fn size(&self) -> usize;

    fn add(&mut self, value: T);

    fn clear(&mut self);

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Ordered snapshot from first to last element. The returned vector is an
    /// independent copy; mutating it never affects the collection.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Appends every element of `other` in its iteration order.
    fn add_all(&mut self, other: &dyn Collection<T>)
    where
        T: Clone,
    {
        for value in other.to_vec() {
            self.add(value);
        }
    }
}
