use super::cell::SealedCell;
use crate::config::{Config, DEFAULT_SEQUENCE_CAPACITY};
use std::{fmt, iter, mem, vec};

/// LIFO stack that never leaks references to its content
///
/// [`peek`](Self::peek), [`Clone`] and [`Debug`](fmt::Debug) run the elements' own impls while the stack is
/// borrowed; if those reach back into the same stack, the call panics.
pub struct Stack<T>(SealedCell<Vec<T>>);

impl<T> Stack<T> {
    /// Creates an empty stack with room for 16 elements.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::with_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        let capacity = config.capacity.unwrap_or(DEFAULT_SEQUENCE_CAPACITY);
        Self(SealedCell::new(Vec::with_capacity(capacity)))
    }

    pub fn push(&self, item: T) {
        self.0.with(|inner| inner.push(item))
    }

    pub fn pop(&self) -> Option<T> {
        self.0.with(|inner| inner.pop())
    }

    /// Returns a copy of the top element without removing it.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.0.with(|inner| inner.last().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.0.with(|inner| inner.len())
    }

    /// Drops every element, keeping the allocation.
    pub fn reset(&self) {
        let mut items = self.0.with(mem::take);
        // element destructors run outside the cell and may push onto this stack
        items.clear();
        self.0.with(|inner| {
            if inner.is_empty() && inner.capacity() < items.capacity() {
                *inner = items;
            }
        })
    }

    pub fn capacity(&self) -> usize {
        self.0.with(|inner| inner.capacity())
    }

    /// Elements ordered bottom to top.
    pub fn into_inner(self) -> Vec<T> {
        self.0.into_inner()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Self {
        Self(SealedCell::new(vec))
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.with(|inner| fmt::Debug::fmt(inner, f))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        self.0.with(|inner| Self(SealedCell::new(inner.clone())))
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.get_mut().extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = iter::Rev<vec::IntoIter<T>>;

    /// Yields the elements in pop order.
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_inner().into_iter().rev()
    }
}
