//! Shared utilities for graph algorithms
//!
//! Provides a read-only adjacency view of a directed graph for algorithm execution.

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Directed graph topology keyed by node value.
///
/// Neighbor lists keep the order in which edges were supplied, and node keys
/// keep the order in which nodes were first seen. Every edge target is also
/// registered as a node (possibly with no outgoing edges).
#[derive(Debug, Clone)]
pub struct AdjacencyList<V> {
    /// Outgoing neighbors for each node
    outgoing: IndexMap<V, Vec<V>>,
    /// Number of directed edges (duplicates included)
    edge_count: usize,
}

impl<V> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self {
            outgoing: IndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> AdjacencyList<V> {
    /// Create an empty adjacency list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(source, target)` pairs, grouping targets under their source
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut outgoing: IndexMap<V, Vec<V>> = IndexMap::new();
        let mut edge_count = 0;

        for (source, target) in edges {
            outgoing.entry(source).or_default().push(target.clone());
            outgoing.entry(target).or_default();
            edge_count += 1;
        }

        AdjacencyList {
            outgoing,
            edge_count,
        }
    }

    /// Get outgoing neighbors (successors) of a node.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors<Q>(&self, node: &Q) -> &[V]
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the out-degree of a node
    pub fn out_degree<Q>(&self, node: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(node).len()
    }

    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing.contains_key(node)
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for AdjacencyList<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
