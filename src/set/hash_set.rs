use crate::config::Config;
use std::borrow::Borrow;
use std::collections::{self, hash_set};
use std::fmt;
use std::hash::Hash;

/// Unordered collection of unique elements.
///
/// Mutation requires `&mut self`, so sharing a set between threads needs external synchronization
/// (or a [`ConcurrentHashSet`](super::ConcurrentHashSet)).
pub struct HashSet<T>(collections::HashSet<T>);

impl<T: Eq + Hash> HashSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::with_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        match config.capacity {
            Some(capacity) => Self(collections::HashSet::with_capacity(capacity)),
            None => Self::default(),
        }
    }

    /// Inserts `item`. Does nothing if an equal element is already present.
    pub fn add(&mut self, item: T) {
        self.0.insert(item);
    }

    pub fn remove<Q>(&mut self, item: &Q)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.remove(item);
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Copies the current elements out, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }

    /// Calls `action` once per element, in no particular order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.0.iter().for_each(action);
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.0.iter()
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn into_inner(self) -> collections::HashSet<T> {
        self.0
    }
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> From<collections::HashSet<T>> for HashSet<T> {
    fn from(hash_set: collections::HashSet<T>) -> Self {
        Self(hash_set)
    }
}

impl<T: Clone> Clone for HashSet<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for HashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Eq + Hash> PartialEq for HashSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq + Hash> Eq for HashSet<T> {}

impl<T: Eq + Hash> Extend<T> for HashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(collections::HashSet::from_iter(iter))
    }
}

impl<T> IntoIterator for HashSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a HashSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
