//! Mazekit core library.
//!
//! Generic containers and graph algorithms: a chained hash map with
//! pluggable chains, union-find, Kruskal spanning trees, Dijkstra shortest
//! paths and a Kruskal maze carver built from them.
//!
//! ```
//! use mazekit_core::{
//!     AdjacencyListDirectedGraph, DijkstraShortestPathFinder, DoubleMapMinPq, ShortestPathFinder,
//!     WeightedEdge,
//! };
//!
//! let graph: AdjacencyListDirectedGraph<_, _> = [
//!     WeightedEdge::new('A', 'B', 1.0),
//!     WeightedEdge::new('B', 'C', 2.0),
//!     WeightedEdge::new('A', 'C', 5.0),
//!     WeightedEdge::new('C', 'D', 1.0),
//! ]
//! .into_iter()
//! .collect();
//! let path = DijkstraShortestPathFinder::<DoubleMapMinPq<char>>::new()
//!     .find_shortest_path(&graph, &'A', &'D')?;
//! assert_eq!(path.total_weight(), 4.0);
//! # Ok::<(), mazekit_core::ShortestPathError>(())
//! ```

pub mod disjoint_sets;
mod error;
pub mod graphs;
pub mod maps;
pub mod maze;
pub mod mst;
pub mod priority_queue;
pub mod shortest_paths;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_sets::{DisjointSets, QuickFindDisjointSets, UnionBySizeCompressingDisjointSets},
    error::{
        DisjointSetError, DisjointSetErrorCode, MapConfigError, MapConfigErrorCode,
        PriorityQueueError, PriorityQueueErrorCode,
    },
    graphs::{AdjacencyListDirectedGraph, BaseEdge, EdgeWithData, Graph, KruskalGraph, WeightedEdge},
    maps::{ArrayMap, ChainedHashMap, ChainedHashMapBuilder, MapChain},
    maze::{
        KruskalMazeCarver, Maze, MazeCarver, MazeError, MazeErrorCode, MazeGraph, Room, RoomGrid,
        Wall,
    },
    mst::{
        KruskalMinimumSpanningTreeFinder, MinimumSpanningTree, MinimumSpanningTreeFinder,
        MstError, MstErrorCode,
    },
    priority_queue::{ArrayHeapMinPq, DoubleMapMinPq, ExtrinsicMinPq},
    shortest_paths::{
        DijkstraShortestPathFinder, ShortestPath, ShortestPathError, ShortestPathErrorCode,
        ShortestPathFinder,
    },
};
