//! # radixtree
//!
//! A mutable, ordered radix tree (compressed prefix tree) keyed by arbitrary byte sequences.
//!
//! Every operation costs time proportional to the length of the key, not the number of stored
//! entries. Besides exact lookups the tree answers prefix queries ([`RadixTree::find`],
//! [`RadixTree::walk`], [`RadixTree::longest_prefix`]) and ordering queries
//! ([`RadixTree::min`], [`RadixTree::max`], [`RadixTree::predecessor`],
//! [`RadixTree::successor`]), and iterates in ascending key order.
//!
//! ```rust
//! use radixtree::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("romane", 1);
//! tree.insert("romanus", 2);
//! tree.insert("rubens", 3);
//!
//! assert_eq!(tree.find("roman"), vec![&1, &2]);
//! assert_eq!(tree.predecessor("rubens"), Some(&2));
//! assert_eq!(tree.remove("romane"), Some(1));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! Integer keys go through [`VectorKey`], which encodes them so that numeric order and byte
//! order agree:
//!
//! ```rust
//! use radixtree::{RadixTree, VectorKey};
//!
//! let mut tree = RadixTree::new();
//! for i in [10i32, -5, 3] {
//!     tree.insert(VectorKey::from(i), i);
//! }
//! assert_eq!(tree.min(), Some(&-5));
//! assert_eq!(tree.successor(VectorKey::from(3i32)), Some(&10));
//! ```
//!
//! The tree is not internally synchronized; share it behind a lock if it needs to be mutated
//! from multiple threads.

mod node;
pub mod utils;

pub mod iter;
pub mod keys;
pub mod mapping;
pub mod partials;
pub mod stats;
pub mod tree;
mod validate;

#[cfg(test)]
mod proptests;

pub use keys::vector_key::VectorKey;
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::RadixTree;
