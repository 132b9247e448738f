//! Generic in-memory collections: [`HashSet`](set::HashSet), [`ConcurrentHashSet`](set::ConcurrentHashSet),
//! [`Queue`](sealed::Queue) and [`Stack`](sealed::Stack).
//!
//! ```
//! use leaf_collections::prelude::*;
//!
//! let queue = Queue::with_capacity(4);
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(Some(1), queue.dequeue());
//!
//! let stack = Stack::new();
//! stack.push('a');
//! stack.push('b');
//! assert_eq!(Some('b'), stack.peek());
//!
//! let set = ConcurrentHashSet::with_config(Config::default());
//! set.add("x");
//! assert!(set.contains("x"));
//! ```

pub mod config;
pub mod sealed;
pub mod set;

pub use config::Config;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::sealed::{Queue, Stack};
    pub use crate::set::{ConcurrentHashSet, HashSet};
}
