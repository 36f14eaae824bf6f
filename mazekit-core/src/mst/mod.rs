//! Minimum spanning trees via Kruskal's algorithm.
//!
//! Edges are treated as undirected: the solver only asks whether an edge's
//! endpoints already share a component. A disconnected graph has no spanning
//! tree and yields [`MinimumSpanningTree::Failure`]; this is an ordinary
//! outcome, not an error. Errors are reserved for malformed input.

use std::marker::PhantomData;

use tracing::{debug, instrument};

use crate::{
    disjoint_sets::DisjointSets,
    error::{DisjointSetError, define_error_codes},
    graphs::{BaseEdge, KruskalGraph},
};

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// An edge endpoint is not among the graph's vertices.
    #[error("edge {edge_index} references a vertex that is not in the graph")]
    UnknownVertex {
        /// Position of the edge in `all_edges()` order.
        edge_index: usize,
        /// Failure reported by the disjoint-set strategy.
        #[source]
        source: DisjointSetError,
    },
    /// An edge weight is negative, infinite or NaN.
    #[error("edge {edge_index} has weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        /// Position of the edge in `all_edges()` order.
        edge_index: usize,
        /// The offending weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// An edge endpoint is not among the graph's vertices.
        UnknownVertex => UnknownVertex { .. } => "MST_UNKNOWN_VERTEX",
        /// An edge weight is negative, infinite or NaN.
        InvalidWeight => InvalidWeight { .. } => "MST_INVALID_WEIGHT",
    }
}

/// Outcome of a minimum spanning tree search.
#[derive(Clone, Debug, PartialEq)]
pub enum MinimumSpanningTree<E> {
    /// The graph is connected; holds `V - 1` edges, or none for an empty
    /// graph.
    Success(Vec<E>),
    /// The graph is disconnected.
    Failure,
}

impl<E> MinimumSpanningTree<E> {
    /// Returns `true` for [`MinimumSpanningTree::Success`].
    #[must_use]
    pub fn exists(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Tree edges; empty on failure.
    #[must_use]
    pub fn edges(&self) -> &[E] {
        match self {
            Self::Success(edges) => edges,
            Self::Failure => &[],
        }
    }

    /// Consumes the result and returns the tree edges; empty on failure.
    #[must_use]
    pub fn into_edges(self) -> Vec<E> {
        match self {
            Self::Success(edges) => edges,
            Self::Failure => Vec::new(),
        }
    }
}

impl<E: BaseEdge> MinimumSpanningTree<E> {
    /// Sum of the tree's edge weights, or `None` on failure.
    #[must_use]
    pub fn total_weight(&self) -> Option<f64> {
        match self {
            Self::Success(edges) => Some(edges.iter().map(BaseEdge::weight).sum()),
            Self::Failure => None,
        }
    }
}

/// Computes minimum spanning trees over a [`KruskalGraph`].
pub trait MinimumSpanningTreeFinder<G: KruskalGraph> {
    /// Finds a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError`] when the graph is malformed.
    fn find_minimum_spanning_tree(
        &self,
        graph: &G,
    ) -> Result<MinimumSpanningTree<G::Edge>, MstError>;
}

/// Kruskal's algorithm over a fresh disjoint-set structure of type `D` per
/// call.
///
/// Edges are sorted by weight with a stable sort, so equal-weight edges are
/// considered in `all_edges()` order. The scan stops as soon as `V - 1`
/// edges have been accepted; edges past that point are not inspected for
/// unknown endpoints.
///
/// # Examples
/// ```
/// use mazekit_core::{
///     AdjacencyListDirectedGraph, KruskalMinimumSpanningTreeFinder, MinimumSpanningTreeFinder,
///     UnionBySizeCompressingDisjointSets, WeightedEdge,
/// };
///
/// let graph: AdjacencyListDirectedGraph<_, _> = [
///     WeightedEdge::new('a', 'b', 1.0),
///     WeightedEdge::new('b', 'c', 2.0),
///     WeightedEdge::new('a', 'c', 3.0),
/// ]
/// .into_iter()
/// .collect();
/// let finder = KruskalMinimumSpanningTreeFinder::<UnionBySizeCompressingDisjointSets<char>>::new();
/// let tree = finder.find_minimum_spanning_tree(&graph)?;
/// assert_eq!(tree.edges().len(), 2);
/// assert_eq!(tree.total_weight(), Some(3.0));
/// # Ok::<(), mazekit_core::MstError>(())
/// ```
pub struct KruskalMinimumSpanningTreeFinder<D> {
    _sets: PhantomData<fn() -> D>,
}

impl<D> KruskalMinimumSpanningTreeFinder<D> {
    /// Creates a finder.
    #[must_use]
    pub const fn new() -> Self {
        Self { _sets: PhantomData }
    }
}

impl<D> Default for KruskalMinimumSpanningTreeFinder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for KruskalMinimumSpanningTreeFinder<D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for KruskalMinimumSpanningTreeFinder<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KruskalMinimumSpanningTreeFinder")
            .field("disjoint_sets", &std::any::type_name::<D>())
            .finish()
    }
}

fn validated_weight<E: BaseEdge>(edge_index: usize, edge: &E) -> Result<f64, MstError> {
    let weight = edge.weight();
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(MstError::InvalidWeight { edge_index, weight })
    }
}

impl<G, D> MinimumSpanningTreeFinder<G> for KruskalMinimumSpanningTreeFinder<D>
where
    G: KruskalGraph,
    G::Edge: Clone,
    D: DisjointSets<G::Vertex> + Default,
{
    #[instrument(
        name = "mst.kruskal",
        err,
        skip_all,
        fields(vertices = tracing::field::Empty, edges = tracing::field::Empty),
    )]
    fn find_minimum_spanning_tree(
        &self,
        graph: &G,
    ) -> Result<MinimumSpanningTree<G::Edge>, MstError> {
        let mut edges = graph
            .all_edges()
            .enumerate()
            .map(|(index, edge)| validated_weight(index, edge).map(|weight| (index, weight, edge)))
            .collect::<Result<Vec<_>, MstError>>()?;
        edges.sort_by(|left, right| left.1.total_cmp(&right.1));

        let mut sets = D::default();
        let mut vertex_count = 0_usize;
        for vertex in graph.all_vertices() {
            sets.make_set(vertex.clone());
            vertex_count += 1;
        }
        let span = tracing::Span::current();
        span.record("vertices", vertex_count);
        span.record("edges", edges.len());

        let Some(needed) = vertex_count.checked_sub(1) else {
            debug!("graph has no vertices");
            return Ok(MinimumSpanningTree::Success(Vec::new()));
        };

        let mut tree = Vec::with_capacity(needed);
        for (edge_index, _, edge) in edges {
            if tree.len() == needed {
                break;
            }
            let merged = sets
                .union(edge.from(), edge.to())
                .map_err(|source| MstError::UnknownVertex { edge_index, source })?;
            if merged {
                tree.push(edge.clone());
            }
        }

        let connected = tree.len() == needed;
        debug!(accepted = tree.len(), connected, "kruskal scan finished");
        Ok(if connected {
            MinimumSpanningTree::Success(tree)
        } else {
            MinimumSpanningTree::Failure
        })
    }
}
