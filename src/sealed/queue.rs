use super::cell::SealedCell;
use crate::config::{Config, DEFAULT_SEQUENCE_CAPACITY};
use std::{fmt, iter, mem, vec};

/// Dead space is only given back to the allocator once the buffer has grown past this many slots.
const SHRINK_THRESHOLD: usize = 32;

/// Contiguous buffer with a live window `[head, tail)`. Slots in front of `head` are dead and hold `None`.
struct Ring<T> {
    items: Vec<Option<T>>,
    head: usize,
    tail: usize,
}

impl<T> Ring<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            head: 0,
            tail: 0,
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.head <= self.tail);
        debug_assert_eq!(self.tail, self.items.len());
    }

    fn enqueue(&mut self, item: T) {
        if self.tail == self.items.len() && self.head > 0 {
            // slide the live window down to index 0, reusing the allocation
            self.items.drain(..self.head);
            log::trace!(
                "Queue compacted: dropped {} dead slots, {} live, capacity {}",
                self.head,
                self.items.len(),
                self.items.capacity()
            );
            self.tail -= self.head;
            self.head = 0;
        }
        self.items.push(Some(item));
        self.tail += 1;
        self.check_invariants();
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.items[self.head].take();
        self.head += 1;

        if self.head > self.tail / 2 && self.items.capacity() > SHRINK_THRESHOLD {
            let live = self.tail - self.head;
            let old_capacity = self.items.capacity();
            let mut items = Vec::with_capacity(live * 2);
            items.extend(self.items.drain(self.head..));
            self.items = items;
            self.head = 0;
            self.tail = live;
            log::trace!(
                "Queue shrunk: {} live, capacity {} -> {}",
                live,
                old_capacity,
                self.items.capacity()
            );
        }
        self.check_invariants();
        item
    }

    fn is_empty(&self) -> bool {
        self.head >= self.tail
    }

    fn len(&self) -> usize {
        self.tail - self.head
    }

    /// Empties the ring, handing the old buffer to the caller so that element destructors run outside the cell.
    fn take_items(&mut self) -> Vec<Option<T>> {
        self.head = 0;
        self.tail = 0;
        mem::take(&mut self.items)
    }

    fn reuse_buffer(&mut self, items: Vec<Option<T>>) {
        debug_assert!(items.is_empty());
        // keep whatever was enqueued while the old elements were being dropped
        if self.items.is_empty() && self.items.capacity() < items.capacity() {
            self.items = items;
        }
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.items[self.head..self.tail].iter().flatten()
    }
}

/// FIFO queue that never leaks references to its content.
///
/// Elements live in one growable buffer addressed by a `head` and a `tail` cursor. Dequeuing only advances
/// `head`; the dead space in front of it is reclaimed either by sliding the live range down when an enqueue
/// reaches the end of the buffer, or by moving the live range into a smaller allocation once more than half
/// of the buffer is dead and the capacity exceeds 32 slots.
///
/// Not `Sync`: a queue can be shared by reference within one thread only.
///
/// [`Clone`] and [`Debug`](fmt::Debug) run the elements' own impls while the queue is borrowed; if those reach
/// back into the same queue, the call panics.
pub struct Queue<T>(SealedCell<Ring<T>>);

impl<T> Queue<T> {
    /// Creates an empty queue with room for 16 elements.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::with_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        let capacity = config.capacity.unwrap_or(DEFAULT_SEQUENCE_CAPACITY);
        Self(SealedCell::new(Ring::with_capacity(capacity)))
    }

    /// Appends `item` at the back. Amortized O(1).
    pub fn enqueue(&self, item: T) {
        self.0.with(|ring| ring.enqueue(item))
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&self) -> Option<T> {
        self.0.with(|ring| ring.dequeue())
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(|ring| ring.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.with(|ring| ring.len())
    }

    /// Drops every element and rewinds both cursors, keeping the allocation.
    pub fn reset(&self) {
        let mut items = self.0.with(|ring| ring.take_items());
        items.clear();
        self.0.with(|ring| ring.reuse_buffer(items))
    }

    /// Raw index of the front element in the backing buffer.
    pub fn head(&self) -> usize {
        self.0.with(|ring| ring.head)
    }

    /// Raw index one past the back element in the backing buffer.
    pub fn tail(&self) -> usize {
        self.0.with(|ring| ring.tail)
    }

    pub fn capacity(&self) -> usize {
        self.0.with(|ring| ring.items.capacity())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(vec: Vec<T>) -> Self {
        let items: Vec<Option<T>> = vec.into_iter().map(Some).collect();
        let tail = items.len();
        Self(SealedCell::new(Ring {
            items,
            head: 0,
            tail,
        }))
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.with(|ring| f.debug_list().entries(ring.live()).finish())
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        let live: Vec<T> = self.0.with(|ring| ring.live().cloned().collect());
        Self::from(live)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let ring = self.0.get_mut();
        for item in iter {
            ring.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = iter::Flatten<vec::IntoIter<Option<T>>>;

    /// Yields the remaining elements front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_inner().items.into_iter().flatten()
    }
}
