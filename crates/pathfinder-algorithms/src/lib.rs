pub mod common;
pub mod pathfinding;

pub use common::AdjacencyList;
pub use pathfinding::{
    bfs, hop_distances, PathResult, SearchConfig, SearchError, SearchResult, SearchStrategy,
};
