//! Unordered collections of unique elements: a plain set for single-owner use and a lock-guarded set that can
//! be shared between threads.

mod concurrent;
mod hash_set;

pub use concurrent::ConcurrentHashSet;
pub use hash_set::HashSet;
