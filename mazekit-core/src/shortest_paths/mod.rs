//! Single-source shortest paths via Dijkstra's algorithm.
//!
//! The search runs in two phases. [`DijkstraShortestPathFinder::construct_shortest_paths_tree`]
//! settles vertices in distance order until the target is settled, recording
//! for each reached vertex the edge that last improved its distance.
//! [`DijkstraShortestPathFinder::extract_shortest_path`] then walks those
//! edges back from the target. An unreachable target is reported as
//! [`ShortestPath::Failure`], not as an error.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    marker::PhantomData,
};

use tracing::{debug, instrument};

use crate::{
    error::{PriorityQueueError, PriorityQueueErrorCode, define_error_codes},
    graphs::{BaseEdge, Graph},
    priority_queue::ExtrinsicMinPq,
};

/// Errors returned while computing a shortest path.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum ShortestPathError {
    /// A traversed edge has a negative, infinite or NaN weight.
    #[error("edge weight {weight} is invalid; weights must be finite and non-negative")]
    InvalidWeight {
        /// The offending weight.
        weight: f64,
    },
    /// The priority queue rejected an operation.
    #[error("priority queue failure: {0}")]
    Queue(#[from] PriorityQueueError),
}

define_error_codes! {
    /// Machine-readable error codes for [`ShortestPathError`].
    enum ShortestPathErrorCode for ShortestPathError {
        /// A traversed edge has a negative, infinite or NaN weight.
        InvalidWeight => InvalidWeight { .. } => "SHORTEST_PATH_INVALID_WEIGHT",
        /// The priority queue rejected an operation.
        Queue => Queue(..) => "SHORTEST_PATH_QUEUE",
    }
}

impl ShortestPathError {
    /// Returns the queue's error code when the failure came from the
    /// priority queue.
    #[must_use]
    pub const fn queue_code(&self) -> Option<PriorityQueueErrorCode> {
        match self {
            Self::Queue(source) => Some(source.code()),
            Self::InvalidWeight { .. } => None,
        }
    }
}

/// Outcome of a shortest-path search.
#[derive(Clone, Debug, PartialEq)]
pub enum ShortestPath<V, E> {
    /// Start and end are the same vertex.
    SingleVertex(V),
    /// Edges leading from start to end, in travel order.
    Success(Vec<E>),
    /// The end vertex is unreachable from the start vertex.
    Failure,
}

impl<V, E> ShortestPath<V, E> {
    /// Returns `true` unless the path is [`ShortestPath::Failure`].
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Failure)
    }

    /// Path edges in travel order; empty for a single vertex or a failure.
    #[must_use]
    pub fn edges(&self) -> &[E] {
        match self {
            Self::Success(edges) => edges,
            Self::SingleVertex(_) | Self::Failure => &[],
        }
    }
}

impl<V: Clone, E: BaseEdge<Vertex = V>> ShortestPath<V, E> {
    /// Vertices visited in travel order, including both ends; empty on
    /// failure.
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        match self {
            Self::SingleVertex(vertex) => vec![vertex.clone()],
            Self::Success(edges) => edges
                .first()
                .map(|first| first.from().clone())
                .into_iter()
                .chain(edges.iter().map(|edge| edge.to().clone()))
                .collect(),
            Self::Failure => Vec::new(),
        }
    }

    /// Sum of the path's edge weights; infinite on failure.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        match self {
            Self::SingleVertex(_) => 0.0,
            Self::Success(edges) => edges.iter().map(BaseEdge::weight).sum(),
            Self::Failure => f64::INFINITY,
        }
    }
}

/// Computes shortest paths over a [`Graph`].
pub trait ShortestPathFinder<G: Graph> {
    /// Finds a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`ShortestPathError`] when a traversed edge has an invalid
    /// weight or the queue strategy misbehaves.
    fn find_shortest_path(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPath<G::Vertex, G::Edge>, ShortestPathError>;
}

/// Dijkstra's algorithm driven by a fresh priority queue of type `Q` per
/// call.
///
/// Only edges reachable before the target is settled are inspected, so an
/// invalid weight elsewhere in the graph goes unnoticed.
///
/// # Examples
/// ```
/// use mazekit_core::{
///     AdjacencyListDirectedGraph, DijkstraShortestPathFinder, DoubleMapMinPq, ShortestPathFinder,
///     WeightedEdge,
/// };
///
/// let graph: AdjacencyListDirectedGraph<_, _> = [
///     WeightedEdge::new('a', 'b', 1.0),
///     WeightedEdge::new('b', 'c', 1.0),
///     WeightedEdge::new('a', 'c', 3.0),
/// ]
/// .into_iter()
/// .collect();
/// let finder = DijkstraShortestPathFinder::<DoubleMapMinPq<char>>::new();
/// let path = finder.find_shortest_path(&graph, &'a', &'c')?;
/// assert_eq!(path.vertices(), vec!['a', 'b', 'c']);
/// assert_eq!(path.total_weight(), 2.0);
/// # Ok::<(), mazekit_core::ShortestPathError>(())
/// ```
pub struct DijkstraShortestPathFinder<Q> {
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> DijkstraShortestPathFinder<Q> {
    /// Creates a finder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _queue: PhantomData,
        }
    }

    /// Settles vertices outward from `start` until `end` is settled or no
    /// reachable vertex remains, and returns each reached vertex's
    /// predecessor edge.
    ///
    /// # Errors
    /// See [`ShortestPathFinder::find_shortest_path`].
    pub fn construct_shortest_paths_tree<G>(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<HashMap<G::Vertex, G::Edge>, ShortestPathError>
    where
        G: Graph,
        G::Edge: Clone,
        Q: ExtrinsicMinPq<G::Vertex> + Default,
    {
        let mut known = HashSet::new();
        let mut queue = Q::default();
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        distances.insert(start.clone(), 0.0_f64);
        queue.add(start.clone(), 0.0)?;

        while !queue.is_empty() {
            let vertex = queue.remove_min()?;
            if vertex == *end {
                known.insert(vertex);
                break;
            }
            let base = distances.get(&vertex).copied().unwrap_or(f64::INFINITY);
            for edge in graph.outgoing_edges_from(&vertex) {
                let neighbour = edge.to();
                if known.contains(neighbour) {
                    continue;
                }
                let weight = edge.weight();
                if !(weight.is_finite() && weight >= 0.0) {
                    return Err(ShortestPathError::InvalidWeight { weight });
                }
                let candidate = base + weight;
                let current = distances.get(neighbour).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    distances.insert(neighbour.clone(), candidate);
                    predecessors.insert(neighbour.clone(), edge.clone());
                    if queue.contains(neighbour) {
                        queue.change_priority(neighbour, candidate)?;
                    } else {
                        queue.add(neighbour.clone(), candidate)?;
                    }
                }
            }
            known.insert(vertex);
        }

        debug!(
            settled = known.len(),
            reached = predecessors.len(),
            target_settled = known.contains(end),
            "dijkstra search finished"
        );
        Ok(predecessors)
    }

    /// Builds the path to `end` from a tree returned by
    /// [`Self::construct_shortest_paths_tree`].
    ///
    /// A tree whose predecessor chain from `end` never reaches `start` yields
    /// [`ShortestPath::Failure`].
    #[must_use]
    pub fn extract_shortest_path<V, E>(
        &self,
        tree: &HashMap<V, E>,
        start: &V,
        end: &V,
    ) -> ShortestPath<V, E>
    where
        V: Hash + Eq + Clone,
        E: BaseEdge<Vertex = V> + Clone,
    {
        if start == end {
            return ShortestPath::SingleVertex(end.clone());
        }
        let mut edges = Vec::new();
        let mut current = end;
        while current != start {
            let Some(edge) = tree.get(current) else {
                return ShortestPath::Failure;
            };
            if edges.len() == tree.len() {
                return ShortestPath::Failure;
            }
            edges.push(edge.clone());
            current = edge.from();
        }
        edges.reverse();
        ShortestPath::Success(edges)
    }
}

impl<Q> Default for DijkstraShortestPathFinder<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for DijkstraShortestPathFinder<Q> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<Q> std::fmt::Debug for DijkstraShortestPathFinder<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DijkstraShortestPathFinder")
            .field("queue", &std::any::type_name::<Q>())
            .finish()
    }
}

impl<G, Q> ShortestPathFinder<G> for DijkstraShortestPathFinder<Q>
where
    G: Graph,
    G::Edge: Clone,
    Q: ExtrinsicMinPq<G::Vertex> + Default,
{
    #[instrument(
        name = "shortest_paths.dijkstra",
        err,
        skip_all,
        fields(tree_size = tracing::field::Empty, edges = tracing::field::Empty),
    )]
    fn find_shortest_path(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPath<G::Vertex, G::Edge>, ShortestPathError> {
        let tree = self.construct_shortest_paths_tree(graph, start, end)?;
        let path = self.extract_shortest_path(&tree, start, end);
        let span = tracing::Span::current();
        span.record("tree_size", tree.len());
        span.record("edges", path.edges().len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
