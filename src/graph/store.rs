//! Append-only edge storage
//!
//! Edges are kept in insertion order. Duplicates are allowed and nothing is
//! ever removed, so indices handed out by iteration stay stable.

use super::edge::Edge;
use tracing::trace;

/// In-memory store of directed labeled edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStore<V, E> {
    edges: Vec<Edge<V, E>>,
}

impl<V, E> Default for EdgeStore<V, E> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<V, E> EdgeStore<V, E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge. No validation and no deduplication.
    pub fn add(&mut self, source: V, target: V, label: E) {
        self.edges.push(Edge::new(source, target, label));
        trace!(edges = self.edges.len(), "edge appended");
    }

    /// Edges whose label satisfies `predicate`, in insertion order.
    ///
    /// Only the label is inspected; endpoints never take part in filtering.
    pub fn find_matching<'a, P>(
        &'a self,
        mut predicate: P,
    ) -> impl Iterator<Item = &'a Edge<V, E>> + 'a
    where
        P: FnMut(&E) -> bool + 'a,
    {
        self.edges.iter().filter(move |edge| predicate(edge.label()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<V, E>> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<V: PartialEq, E> EdgeStore<V, E> {
    /// Outgoing edges of `source`
    pub fn edges_from<'a>(&'a self, source: &'a V) -> impl Iterator<Item = &'a Edge<V, E>> + 'a {
        self.edges.iter().filter(move |edge| edge.starts_from(source))
    }

    /// Incoming edges of `target`
    pub fn edges_to<'a>(&'a self, target: &'a V) -> impl Iterator<Item = &'a Edge<V, E>> + 'a {
        self.edges.iter().filter(move |edge| edge.ends_at(target))
    }
}

impl<V: Clone, E> EdgeStore<V, E> {
    /// `(source, target)` pairs in insertion order, labels dropped
    pub fn endpoints(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.edges
            .iter()
            .map(|edge| (edge.source().clone(), edge.target().clone()))
    }
}

impl<V, E> Extend<(V, V, E)> for EdgeStore<V, E> {
    fn extend<I: IntoIterator<Item = (V, V, E)>>(&mut self, iter: I) {
        for (source, target, label) in iter {
            self.add(source, target, label);
        }
    }
}

impl<V, E> FromIterator<(V, V, E)> for EdgeStore<V, E> {
    fn from_iter<I: IntoIterator<Item = (V, V, E)>>(iter: I) -> Self {
        let mut store = EdgeStore::new();
        store.extend(iter);
        store
    }
}

impl<'a, V, E> IntoIterator for &'a EdgeStore<V, E> {
    type Item = &'a Edge<V, E>;
    type IntoIter = std::slice::Iter<'a, Edge<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
