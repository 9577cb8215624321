//! Edge data model
//!
//! This module implements the labeled edge store:
//! - Directed edges `(source, target, label)` over generic node and label types
//! - Append-only storage preserving insertion order, duplicates allowed
//! - Label-predicate retrieval

pub mod edge;
pub mod store;

// Re-export main types
pub use edge::Edge;
pub use store::EdgeStore;
