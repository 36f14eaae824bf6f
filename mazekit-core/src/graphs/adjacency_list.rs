//! Directed graph stored as per-vertex edge lists.

use std::{fmt, hash::Hash};

use crate::ChainedHashMap;

use super::{BaseEdge, Graph, KruskalGraph};

/// A directed graph that keeps, for every vertex, the list of edges leaving
/// it.
///
/// Vertices are numbered densely in insertion order; a [`ChainedHashMap`]
/// maps each vertex to its slot. Adding an edge registers both endpoints.
///
/// # Examples
/// ```
/// use mazekit_core::{AdjacencyListDirectedGraph, WeightedEdge};
///
/// let graph: AdjacencyListDirectedGraph<_, _> = [
///     WeightedEdge::new("a", "b", 1.0),
///     WeightedEdge::new("b", "c", 2.0),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.outgoing_edges_from(&"b").len(), 1);
/// assert!(graph.outgoing_edges_from(&"c").is_empty());
/// ```
pub struct AdjacencyListDirectedGraph<V, E> {
    vertices: Vec<V>,
    slots: ChainedHashMap<V, usize>,
    adjacency: Vec<Vec<E>>,
    edge_count: usize,
}

impl<V, E> AdjacencyListDirectedGraph<V, E> {
    /// Creates a graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            slots: ChainedHashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Vertices in insertion order.
    pub fn all_vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Every edge, grouped by tail vertex.
    pub fn all_edges(&self) -> impl Iterator<Item = &E> {
        self.adjacency.iter().flatten()
    }
}

impl<V, E> AdjacencyListDirectedGraph<V, E>
where
    V: Hash + Eq + Clone,
    E: BaseEdge<Vertex = V>,
{
    /// Registers `vertex`, returning `false` when it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.slot_of(vertex).1
    }

    /// Adds `edge`, registering its endpoints if needed.
    pub fn add_edge(&mut self, edge: E) {
        let (tail, _) = self.slot_of(edge.from().clone());
        self.slot_of(edge.to().clone());
        self.adjacency[tail].push(edge);
        self.edge_count += 1;
    }

    /// Returns `true` when `vertex` is registered.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Edges leaving `vertex`; empty when the vertex is unknown.
    #[must_use]
    pub fn outgoing_edges_from(&self, vertex: &V) -> &[E] {
        match self.slots.get(vertex) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    fn slot_of(&mut self, vertex: V) -> (usize, bool) {
        if let Some(&slot) = self.slots.get(&vertex) {
            return (slot, false);
        }
        let slot = self.vertices.len();
        self.slots.put(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        (slot, true)
    }
}

impl<V, E> Default for AdjacencyListDirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for AdjacencyListDirectedGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyListDirectedGraph")
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}

impl<V, E> FromIterator<E> for AdjacencyListDirectedGraph<V, E>
where
    V: Hash + Eq + Clone,
    E: BaseEdge<Vertex = V>,
{
    fn from_iter<I: IntoIterator<Item = E>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<V, E> Extend<E> for AdjacencyListDirectedGraph<V, E>
where
    V: Hash + Eq + Clone,
    E: BaseEdge<Vertex = V>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }
}

impl<V, E> Graph for AdjacencyListDirectedGraph<V, E>
where
    V: Hash + Eq + Clone,
    E: BaseEdge<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;

    fn all_vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    fn outgoing_edges_from(&self, vertex: &V) -> &[E] {
        AdjacencyListDirectedGraph::outgoing_edges_from(self, vertex)
    }
}

impl<V, E> KruskalGraph for AdjacencyListDirectedGraph<V, E>
where
    V: Hash + Eq + Clone,
    E: BaseEdge<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;

    fn all_vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    fn all_edges(&self) -> impl Iterator<Item = &E> {
        self.adjacency.iter().flatten()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
