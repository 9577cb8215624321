//! Pathfinding algorithms
//!
//! Minimum-hop shortest path via breadth-first search, plus single-source
//! hop distances.

use super::common::AdjacencyList;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::hash::Hash;
use thiserror::Error;

/// Reasons a search can stop before it knows whether a path exists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("goal not reached within depth limit of {max_depth} hops")]
    DepthLimitReached { max_depth: usize },

    #[error("goal not reached after exploring {max_explored} states")]
    ExploreLimitReached { max_explored: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;

/// How the BFS frontier remembers the way back to the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Queue whole paths; each step copies the path and appends a neighbor
    #[default]
    PathCopy,
    /// Queue bare nodes and rebuild the path from a node -> parent map
    ParentLinks,
}

/// Shortest path search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Frontier representation
    pub strategy: SearchStrategy,
    /// Maximum hop count of any explored path (None = unbounded)
    pub max_depth: Option<usize>,
    /// Maximum number of dequeued states (None = unbounded)
    pub max_explored: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::PathCopy,
            max_depth: None,
            max_explored: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_explored(mut self, max_explored: usize) -> Self {
        self.max_explored = Some(max_explored);
        self
    }
}

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<V> {
    pub source: V,
    pub target: V,
    pub path: Vec<V>,
    /// Number of edges on `path`
    pub hops: usize,
    /// Number of states taken off the queue
    pub explored: usize,
}

/// Tracks search limits for a single run
struct Budget {
    max_depth: Option<usize>,
    max_explored: Option<usize>,
    explored: usize,
    depth_cut: bool,
}

impl Budget {
    fn new(config: &SearchConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_explored: config.max_explored,
            explored: 0,
            depth_cut: false,
        }
    }

    /// Account for one dequeued state
    fn take(&mut self) -> SearchResult<()> {
        if let Some(max_explored) = self.max_explored {
            if self.explored >= max_explored {
                return Err(SearchError::ExploreLimitReached { max_explored });
            }
        }
        self.explored += 1;
        Ok(())
    }

    /// Whether a state `hops` edges from the source may be extended
    fn within_depth(&mut self, hops: usize) -> bool {
        match self.max_depth {
            Some(max_depth) if hops >= max_depth => {
                self.depth_cut = true;
                false
            }
            _ => true,
        }
    }

    fn found<V: Clone>(&self, source: &V, target: &V, path: Vec<V>) -> PathResult<V> {
        PathResult {
            source: source.clone(),
            target: target.clone(),
            hops: path.len().saturating_sub(1),
            path,
            explored: self.explored,
        }
    }

    /// Queue drained without reaching the goal
    fn exhausted<V>(self) -> SearchResult<Option<PathResult<V>>> {
        match self.max_depth {
            Some(max_depth) if self.depth_cut => Err(SearchError::DepthLimitReached { max_depth }),
            _ => Ok(None),
        }
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns `Ok(None)` when `target` is unreachable from `source`. Nodes are
/// marked visited when they are enqueued, so every node enters the queue at
/// most once and the search terminates on cyclic graphs. Unknown nodes have
/// no neighbors; `source == target` always yields the single-node path.
pub fn bfs<V>(
    view: &AdjacencyList<V>,
    source: &V,
    target: &V,
    config: &SearchConfig,
) -> SearchResult<Option<PathResult<V>>>
where
    V: Eq + Hash + Clone,
{
    let budget = Budget::new(config);
    match config.strategy {
        SearchStrategy::PathCopy => bfs_path_copy(view, source, target, budget),
        SearchStrategy::ParentLinks => bfs_parent_links(view, source, target, budget),
    }
}

fn bfs_path_copy<V>(
    view: &AdjacencyList<V>,
    source: &V,
    target: &V,
    mut budget: Budget,
) -> SearchResult<Option<PathResult<V>>>
where
    V: Eq + Hash + Clone,
{
    let mut queue: VecDeque<Vec<V>> = VecDeque::new();
    let mut visited: FxHashSet<V> = FxHashSet::default();

    queue.push_back(vec![source.clone()]);
    visited.insert(source.clone());

    while let Some(path) = queue.pop_front() {
        budget.take()?;

        let Some(current) = path.last() else {
            continue;
        };
        if current == target {
            return Ok(Some(budget.found(source, target, path)));
        }

        let hops = path.len() - 1;
        for next in view.neighbors(current) {
            if visited.contains(next) {
                continue;
            }
            if !budget.within_depth(hops) {
                break;
            }
            visited.insert(next.clone());

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend(path.iter().cloned());
            extended.push(next.clone());
            queue.push_back(extended);
        }
    }

    budget.exhausted()
}

fn bfs_parent_links<V>(
    view: &AdjacencyList<V>,
    source: &V,
    target: &V,
    mut budget: Budget,
) -> SearchResult<Option<PathResult<V>>>
where
    V: Eq + Hash + Clone,
{
    let mut queue: VecDeque<(V, usize)> = VecDeque::new();
    let mut parents: FxHashMap<V, Option<V>> = FxHashMap::default(); // node -> parent

    queue.push_back((source.clone(), 0));
    parents.insert(source.clone(), None);

    while let Some((current, hops)) = queue.pop_front() {
        budget.take()?;

        if &current == target {
            // Reconstruct path
            let mut path = Vec::with_capacity(hops + 1);
            let mut curr = Some(current);
            while let Some(node) = curr {
                curr = parents.get(&node).cloned().flatten();
                path.push(node);
            }
            path.reverse();
            return Ok(Some(budget.found(source, target, path)));
        }

        for next in view.neighbors(&current) {
            if parents.contains_key(next) {
                continue;
            }
            if !budget.within_depth(hops) {
                break;
            }
            parents.insert(next.clone(), Some(current.clone()));
            queue.push_back((next.clone(), hops + 1));
        }
    }

    budget.exhausted()
}

/// Hop distance from `source` to every node reachable from it.
///
/// Entries are in discovery order; `source` itself maps to 0.
pub fn hop_distances<V>(view: &AdjacencyList<V>, source: &V) -> IndexMap<V, usize>
where
    V: Eq + Hash + Clone,
{
    let mut dist = IndexMap::new();
    let mut queue = VecDeque::new();

    dist.insert(source.clone(), 0);
    queue.push_back((source.clone(), 0));

    while let Some((current, d)) = queue.pop_front() {
        for next in view.neighbors(&current) {
            if !dist.contains_key(next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back((next.clone(), d + 1));
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_strategies() -> [SearchConfig; 2] {
        [
            SearchConfig::default(),
            SearchConfig::default().with_strategy(SearchStrategy::ParentLinks),
        ]
    }

    #[test]
    fn test_bfs() {
        // 1->2->3
        let view = AdjacencyList::from_edges([(1u64, 2), (2, 3)]);

        for config in both_strategies() {
            let result = bfs(&view, &1, &3, &config).unwrap().unwrap();
            assert_eq!(result.path, vec![1, 2, 3]);
            assert_eq!(result.hops, 2);
            assert_eq!(result.source, 1);
            assert_eq!(result.target, 3);
        }
    }

    #[test]
    fn test_bfs_prefers_fewest_hops() {
        // 1->2->3->4 plus shortcut 1->5->4
        let view = AdjacencyList::from_edges([(1u64, 2), (2, 3), (3, 4), (1, 5), (5, 4)]);

        for config in both_strategies() {
            let result = bfs(&view, &1, &4, &config).unwrap().unwrap();
            assert_eq!(result.path, vec![1, 5, 4]);
        }
    }

    #[test]
    fn test_bfs_ties_follow_adjacency_order() {
        // Two 2-hop routes to 4; the one through the first-listed neighbor wins
        let view = AdjacencyList::from_edges([(1u64, 3), (1, 2), (2, 4), (3, 4)]);

        for config in both_strategies() {
            let result = bfs(&view, &1, &4, &config).unwrap().unwrap();
            assert_eq!(result.path, vec![1, 3, 4]);
        }
    }

    #[test]
    fn test_bfs_same_source_and_target() {
        let view = AdjacencyList::from_edges([(1u64, 2)]);

        for config in both_strategies() {
            let result = bfs(&view, &9, &9, &config).unwrap().unwrap();
            assert_eq!(result.path, vec![9]);
            assert_eq!(result.hops, 0);
            assert_eq!(result.explored, 1);
        }
    }

    #[test]
    fn test_bfs_unreachable() {
        let view = AdjacencyList::from_edges([(1u64, 2), (3, 4)]);

        for config in both_strategies() {
            assert_eq!(bfs(&view, &1, &4, &config).unwrap(), None);
            assert_eq!(bfs(&view, &4, &1, &config).unwrap(), None);
        }
    }

    #[test]
    fn test_bfs_terminates_on_cycles() {
        let view = AdjacencyList::from_edges([("A", "B"), ("B", "A"), ("B", "C"), ("C", "C")]);

        for config in both_strategies() {
            let result = bfs(&view, &"A", &"C", &config).unwrap().unwrap();
            assert_eq!(result.path, vec!["A", "B", "C"]);

            assert_eq!(bfs(&view, &"A", &"Z", &config).unwrap(), None);
        }
    }

    #[test]
    fn test_bfs_enqueues_each_node_once() {
        // Diamond with a back edge: every node is dequeued at most once
        let view = AdjacencyList::from_edges([(1u64, 2), (1, 3), (2, 4), (3, 4), (4, 1)]);

        for config in both_strategies() {
            assert_eq!(bfs(&view, &1, &99, &config).unwrap(), None);
            let result = bfs(&view, &1, &4, &config).unwrap().unwrap();
            assert!(result.explored <= view.node_count());
        }
    }

    #[test]
    fn test_depth_limit() {
        let view = AdjacencyList::from_edges([(1u64, 2), (2, 3), (3, 4)]);

        for config in both_strategies() {
            let within = config.clone().with_max_depth(3);
            assert_eq!(bfs(&view, &1, &4, &within).unwrap().unwrap().hops, 3);

            let cut = config.clone().with_max_depth(2);
            assert_eq!(
                bfs(&view, &1, &4, &cut),
                Err(SearchError::DepthLimitReached { max_depth: 2 })
            );
        }
    }

    #[test]
    fn test_depth_limit_not_reported_when_graph_exhausted() {
        // Nothing lies beyond depth 1, so a limit of 1 proves absence
        let view = AdjacencyList::from_edges([(1u64, 2)]);
        let config = SearchConfig::default().with_max_depth(1);

        assert_eq!(bfs(&view, &1, &7, &config).unwrap(), None);
    }

    #[test]
    fn test_explore_limit() {
        let view = AdjacencyList::from_edges([(1u64, 2), (2, 3), (3, 4)]);

        for config in both_strategies() {
            let enough = config.clone().with_max_explored(4);
            assert_eq!(bfs(&view, &1, &4, &enough).unwrap().unwrap().explored, 4);

            let short = config.clone().with_max_explored(3);
            assert_eq!(
                bfs(&view, &1, &4, &short),
                Err(SearchError::ExploreLimitReached { max_explored: 3 })
            );
        }
    }

    #[test]
    fn test_hop_distances() {
        let view = AdjacencyList::from_edges([(1u64, 2), (1, 3), (2, 4), (3, 4), (4, 1), (5, 6)]);

        let dist = hop_distances(&view, &1);
        assert_eq!(dist.len(), 4);
        assert_eq!(dist[&1u64], 0);
        assert_eq!(dist[&2u64], 1);
        assert_eq!(dist[&3u64], 1);
        assert_eq!(dist[&4u64], 2);
        assert!(!dist.contains_key(&5u64));
        assert_eq!(dist.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_error_messages() {
        let err = SearchError::DepthLimitReached { max_depth: 5 };
        assert_eq!(err.to_string(), "goal not reached within depth limit of 5 hops");
    }
}
