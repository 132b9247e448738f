use crate::config::Config;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections;
use std::fmt;
use std::hash::Hash;

/// Thread-safe unordered collection of unique elements.
///
/// A single reader/writer lock guards the storage: [`add`](Self::add), [`add_all`](Self::add_all),
/// [`remove`](Self::remove) and [`clear`](Self::clear) take it exclusively, every other operation takes it
/// shared. Each operation releases the lock before returning, including when it unwinds.
///
/// The lock is **not reentrant**. [`for_each`](Self::for_each) runs its callback with the shared lock held,
/// so the callback must not call back into the same set: a mutating call deadlocks, and even a read may
/// deadlock once a writer is queued.
pub struct ConcurrentHashSet<T> {
    inner: RwLock<collections::HashSet<T>>,
}

impl<T: Eq + Hash> ConcurrentHashSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::with_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        match config.capacity {
            Some(capacity) => Self {
                inner: RwLock::new(collections::HashSet::with_capacity(capacity)),
            },
            None => Self::default(),
        }
    }

    /// Inserts `item`. Does nothing if an equal element is already present.
    pub fn add(&self, item: T) {
        self.inner.write().insert(item);
    }

    /// Inserts every item of `iter` under a single exclusive acquisition.
    pub fn add_all<I>(&self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().extend(iter);
    }

    pub fn remove<Q>(&self, item: &Q)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(item);
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Copies the current elements out, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }

    /// Calls `action` once per element, in no particular order, while holding the shared lock.
    ///
    /// `action` must not access this set. See the type-level docs.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        let guard = self.inner.read();
        guard.iter().for_each(action);
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn into_inner(self) -> collections::HashSet<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for ConcurrentHashSet<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Default::default()),
        }
    }
}

impl<T> From<collections::HashSet<T>> for ConcurrentHashSet<T> {
    fn from(hash_set: collections::HashSet<T>) -> Self {
        Self {
            inner: RwLock::new(hash_set),
        }
    }
}

impl<T: Clone> Clone for ConcurrentHashSet<T> {
    fn clone(&self) -> Self {
        self.inner.read().clone().into()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentHashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.read().iter()).finish()
    }
}

impl<T: Eq + Hash> Extend<T> for ConcurrentHashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for ConcurrentHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<collections::HashSet<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_set_is_send_and_sync() {
        assert_impl_all!(ConcurrentHashSet<usize>: std::marker::Send, Sync);
        assert_impl_all!(Arc<ConcurrentHashSet<String>>: std::marker::Send, Sync);
        assert_not_impl_any!(ConcurrentHashSet<Rc<usize>>: std::marker::Send, Sync);
    }

    #[test]
    fn test_add_remove_contains() {
        let set = ConcurrentHashSet::new();
        set.add(1);
        set.add(1);
        set.add(2);
        assert_eq!(2, set.len());
        assert!(set.contains(&1));
        assert!(!set.contains(&3));

        set.remove(&1);
        assert!(!set.contains(&1));
        assert_eq!(1, set.len());
    }

    #[test]
    fn test_clear() {
        let set: ConcurrentHashSet<_> = (0..5).collect();
        assert!(!set.is_empty());

        set.clear();
        assert!(set.is_empty());
        assert_eq!(0, set.len());

        set.add(9);
        assert_eq!(vec![9], set.to_vec());
    }

    #[test]
    fn test_for_each_visits_every_element() {
        let set = ConcurrentHashSet::with_capacity(8);
        set.add_all(["a", "b", "c"]);

        let mut visited = Vec::new();
        set.for_each(|item| visited.push(*item));
        visited.sort();
        assert_eq!(vec!["a", "b", "c"], visited);
    }

    #[test]
    fn test_readers_on_other_threads_proceed_during_for_each() {
        let set: ConcurrentHashSet<_> = (0..3).collect();
        let mut seen = 0;
        set.for_each(|item| {
            let found = thread::scope(|s| s.spawn(|| set.contains(item)).join().unwrap());
            assert!(found);
            seen += 1;
        });
        assert_eq!(3, seen);
    }

    #[test]
    fn test_lock_is_released_when_callback_panics() {
        let set: ConcurrentHashSet<_> = (0..3).collect();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            set.for_each(|_| panic!("callback failure"));
        }));
        assert!(result.is_err());

        set.add(3);
        assert_eq!(4, set.len());
    }

    #[test]
    fn test_concurrent_adds_from_threads_converge() {
        const TASKS: usize = 64;
        let set = ConcurrentHashSet::new();

        thread::scope(|s| {
            for i in 0..TASKS {
                let set = &set;
                s.spawn(move || set.add(i));
            }
        });

        assert_eq!(TASKS, set.len());
        for i in 0..TASKS {
            assert!(set.contains(&i));
        }
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let set = ConcurrentHashSet::new();

        thread::scope(|s| {
            for writer in 0..4 {
                let set = &set;
                s.spawn(move || {
                    for i in 0..250 {
                        set.add(writer * 1000 + i);
                    }
                });
            }
            for _ in 0..4 {
                let set = &set;
                s.spawn(move || {
                    for _ in 0..100 {
                        let snapshot = set.to_vec();
                        assert!(snapshot.len() <= 1000);
                    }
                });
            }
        });

        assert_eq!(1000, set.len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_from_tasks_converge() {
        const TASKS: u32 = 100;
        let set = Arc::new(ConcurrentHashSet::new());

        let handles: Vec<_> = (0..TASKS)
            .map(|i| {
                let set = set.clone();
                tokio::spawn(async move { set.add(i) })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(TASKS as usize, set.len());
        assert!((0..TASKS).all(|i| set.contains(&i)));
    }
}
