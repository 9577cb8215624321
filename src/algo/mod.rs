//! Shortest path finding
//!
//! Algorithms are implemented in the `pathfinder-algorithms` crate.
//! This module provides the integration layer: an owned adjacency list built
//! from edge pairs, a search configuration and logging around each query.

use indexmap::IndexMap;
use std::hash::Hash;
use tracing::{debug, warn};

// Re-export algorithms
pub use pathfinder_algorithms::{
    bfs, hop_distances, AdjacencyList, PathResult, SearchConfig, SearchError, SearchResult,
    SearchStrategy,
};

/// Minimum-hop path finder over an unweighted directed graph.
///
/// The adjacency list is built once at construction and never changes, so
/// repeated queries with the same arguments return the same answer.
#[derive(Debug, Clone)]
pub struct ShortestPathFinder<V> {
    adjacency: AdjacencyList<V>,
    config: SearchConfig,
}

impl<V: Eq + Hash + Clone> ShortestPathFinder<V> {
    /// Build from `(source, target)` pairs with the default search configuration
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::with_config(edges, SearchConfig::default())
    }

    /// Build from `(source, target)` pairs.
    ///
    /// Targets are grouped under their source in the order the pairs are supplied.
    pub fn with_config<I>(edges: I, config: SearchConfig) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let adjacency = AdjacencyList::from_edges(edges);
        debug!(
            nodes = adjacency.node_count(),
            edges = adjacency.edge_count(),
            strategy = ?config.strategy,
            "built adjacency list"
        );

        Self { adjacency, config }
    }

    /// Fewest-hop path from `start` to `goal`, both ends included.
    ///
    /// Returns an empty path when `goal` is unreachable (or when a configured
    /// search limit stops the search first; see [`Self::search`]). When
    /// `start == goal` the result is `[start]`.
    pub fn shortest_path(&self, start: &V, goal: &V) -> Vec<V> {
        match self.search(start, goal) {
            Ok(Some(result)) => result.path,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "shortest path search stopped early");
                Vec::new()
            }
        }
    }

    /// Run the search and report how it ended.
    ///
    /// `Ok(None)` means no path exists. `Err` means a limit in the
    /// [`SearchConfig`] stopped the search before that could be decided.
    pub fn search(&self, start: &V, goal: &V) -> SearchResult<Option<PathResult<V>>> {
        let result = bfs(&self.adjacency, start, goal, &self.config);
        match &result {
            Ok(Some(found)) => debug!(hops = found.hops, explored = found.explored, "path found"),
            Ok(None) => debug!("no path"),
            Err(_) => {}
        }
        result
    }

    /// Hop distance from `start` to every node reachable from it
    pub fn hop_distances(&self, start: &V) -> IndexMap<V, usize> {
        hop_distances(&self.adjacency, start)
    }

    /// Direct successors of `node`; empty for unknown nodes
    pub fn neighbors(&self, node: &V) -> &[V] {
        self.adjacency.neighbors(node)
    }

    pub fn adjacency(&self) -> &AdjacencyList<V> {
        &self.adjacency
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for ShortestPathFinder<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
