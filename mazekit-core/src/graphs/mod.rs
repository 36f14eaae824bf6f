//! Weighted-graph capabilities consumed by the solvers.
//!
//! [`Graph`] exposes per-vertex adjacency for traversal algorithms such as
//! Dijkstra. [`KruskalGraph`] exposes the full edge list for algorithms that
//! never walk adjacency, such as Kruskal. A type may implement both, as
//! [`AdjacencyListDirectedGraph`] does.

mod adjacency_list;
mod edges;

use std::hash::Hash;

pub use self::{
    adjacency_list::AdjacencyListDirectedGraph,
    edges::{EdgeWithData, WeightedEdge},
};

/// A directed edge with a weight.
///
/// Solvers expect `weight()` to be finite and non-negative and reject edges
/// that are not.
pub trait BaseEdge {
    /// Vertex type joined by the edge.
    type Vertex;

    /// Tail of the edge.
    fn from(&self) -> &Self::Vertex;

    /// Head of the edge.
    fn to(&self) -> &Self::Vertex;

    /// Cost of travelling along the edge.
    fn weight(&self) -> f64;
}

/// A graph that can enumerate the edges leaving each vertex.
pub trait Graph {
    /// Vertex type.
    type Vertex: Hash + Eq + Clone;
    /// Edge type.
    type Edge: BaseEdge<Vertex = Self::Vertex>;

    /// Every vertex of the graph, each exactly once.
    fn all_vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Edges whose tail is `vertex`. Unknown vertices have no edges.
    fn outgoing_edges_from(&self, vertex: &Self::Vertex) -> &[Self::Edge];
}

/// A graph that can enumerate all of its edges at once.
pub trait KruskalGraph {
    /// Vertex type.
    type Vertex: Hash + Eq + Clone;
    /// Edge type.
    type Edge: BaseEdge<Vertex = Self::Vertex>;

    /// Every vertex of the graph, each exactly once.
    fn all_vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Every edge of the graph.
    fn all_edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.all_vertices().count()
    }
}
