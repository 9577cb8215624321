//! Directed labeled edge
//!
//! An edge is immutable once created: endpoints and label are read through
//! accessors and can only be taken back out by consuming the edge.

use serde::{Deserialize, Serialize};

/// A directed edge from `source` to `target` carrying a `label`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, E> {
    /// Source node (edge goes FROM this node)
    source: V,

    /// Target node (edge goes TO this node)
    target: V,

    /// Label attached to the edge (e.g. a weight, a relationship name)
    label: E,
}

impl<V, E> Edge<V, E> {
    /// Create a new directed edge
    pub fn new(source: V, target: V, label: E) -> Self {
        Edge {
            source,
            target,
            label,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn label(&self) -> &E {
        &self.label
    }

    /// Borrow `(source, target)`
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }

    /// Consume the edge into `(source, target, label)`
    pub fn into_parts(self) -> (V, V, E) {
        (self.source, self.target, self.label)
    }
}

impl<V: PartialEq, E> Edge<V, E> {
    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: &V, node2: &V) -> bool {
        (self.source == *node1 && self.target == *node2)
            || (self.source == *node2 && self.target == *node1)
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &V) -> bool {
        self.source == *node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &V) -> bool {
        self.target == *node
    }
}

impl<V, E> From<(V, V, E)> for Edge<V, E> {
    fn from((source, target, label): (V, V, E)) -> Self {
        Edge::new(source, target, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("hello", "goodbye", 2);

        assert_eq!(*edge.source(), "hello");
        assert_eq!(*edge.target(), "goodbye");
        assert_eq!(*edge.label(), 2);
        assert_eq!(edge.endpoints(), (&"hello", &"goodbye"));
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new(10u64, 20u64, "FOLLOWS");

        assert!(edge.starts_from(&10));
        assert!(edge.ends_at(&20));
        assert!(!edge.starts_from(&20));
        assert!(!edge.ends_at(&10));
    }

    #[test]
    fn test_edge_connects() {
        let edge = Edge::new(10u64, 20u64, "LINKS");

        assert!(edge.connects(&10, &20));
        assert!(edge.connects(&20, &10)); // Order doesn't matter for connects()
        assert!(!edge.connects(&10, &30));
    }

    #[test]
    fn test_parallel_edges_compare_by_value() {
        let edge1 = Edge::new(1u64, 2u64, "KNOWS");
        let edge2 = Edge::new(1u64, 2u64, "WORKS_WITH");
        let edge3 = Edge::new(1u64, 2u64, "KNOWS");

        assert_ne!(edge1, edge2);
        assert_eq!(edge1, edge3);
    }

    #[test]
    fn test_into_parts() {
        let edge: Edge<String, i32> = ("a".to_string(), "b".to_string(), 7).into();
        assert_eq!(edge.into_parts(), ("a".to_string(), "b".to_string(), 7));
    }

    #[test]
    fn test_serialized_shape() {
        let edge = Edge::new("hello", "meowww", 30);
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "source": "hello", "target": "meowww", "label": 30 })
        );

        let back: Edge<String, i64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, Edge::new("hello".to_string(), "meowww".to_string(), 30));
    }
}
