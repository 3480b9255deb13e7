//! Owned key types.
//!
//! Any `AsRef<[u8]>` can be used as a key directly. The types here add conversions for values
//! that need an order-preserving byte encoding first, such as integers.

pub mod vector_key;
