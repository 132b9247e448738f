//! Single-threaded sequences that never leak references to their content, and therefore can be safely accessed
//! via shared references.

mod cell;
mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
