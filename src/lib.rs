//! Pathfinder
//!
//! Two independent in-memory components for small directed graphs:
//!
//! - [`EdgeStore`]: an append-only list of directed labeled edges with
//!   label-predicate retrieval.
//! - [`ShortestPathFinder`]: an adjacency list built from `(source, target)`
//!   pairs answering fewest-hop path queries with breadth-first search.
//!
//! Node and label types are generic. Nodes used for path finding need
//! `Eq + Hash + Clone`.
//!
//! ## Example Usage
//!
//! ```rust
//! use pathfinder::{EdgeStore, ShortestPathFinder};
//!
//! let mut store = EdgeStore::new();
//! store.add("hello", "goodbye", 2);
//! store.add("hello", "meowww", 30);
//!
//! let heavy: Vec<_> = store.find_matching(|weight| *weight > 15).collect();
//! assert_eq!(heavy.len(), 1);
//! assert_eq!(*heavy[0].target(), "meowww");
//!
//! let finder = ShortestPathFinder::new([("A", "B"), ("B", "A"), ("B", "C")]);
//! assert_eq!(finder.shortest_path(&"A", &"C"), vec!["A", "B", "C"]);
//! assert!(finder.shortest_path(&"C", &"A").is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, EdgeStore};

pub use algo::{
    PathResult, SearchConfig, SearchError, SearchResult, SearchStrategy, ShortestPathFinder,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
