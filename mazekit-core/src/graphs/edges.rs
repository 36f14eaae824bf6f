//! Concrete edge types.

use std::hash::{Hash, Hasher};

use super::BaseEdge;

/// A directed edge carrying only a weight.
///
/// Equality and hashing compare the endpoints and the exact bit pattern of
/// the weight, so an edge is always equal to itself even with a NaN weight.
///
/// # Examples
/// ```
/// use mazekit_core::{BaseEdge, WeightedEdge};
///
/// let edge = WeightedEdge::new('a', 'b', 1.5);
/// assert_eq!((*edge.from(), *edge.to(), edge.weight()), ('a', 'b', 1.5));
/// ```
#[derive(Clone, Debug)]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge `from -> to`.
    #[must_use]
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the edge with its endpoints swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<V> BaseEdge for WeightedEdge<V> {
    type Vertex = V;

    #[rustfmt::skip]
    fn from(&self) -> &V { &self.from }

    #[rustfmt::skip]
    fn to(&self) -> &V { &self.to }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Hash> Hash for WeightedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.to_bits().hash(state);
    }
}

/// A directed edge carrying a weight and a payload.
///
/// The maze carver uses the payload to map a spanning-tree edge back to the
/// wall it came from.
///
/// # Examples
/// ```
/// use mazekit_core::{BaseEdge, EdgeWithData};
///
/// let edge = EdgeWithData::new(0, 1, 2.0, "door");
/// assert_eq!(*edge.data(), "door");
/// assert_eq!(edge.into_data(), "door");
/// ```
#[derive(Clone, Debug)]
pub struct EdgeWithData<V, D> {
    from: V,
    to: V,
    weight: f64,
    data: D,
}

impl<V, D> EdgeWithData<V, D> {
    /// Creates an edge `from -> to` carrying `data`.
    #[must_use]
    pub fn new(from: V, to: V, weight: f64, data: D) -> Self {
        Self {
            from,
            to,
            weight,
            data,
        }
    }

    /// Payload attached to the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn data(&self) -> &D { &self.data }

    /// Consumes the edge and returns its payload.
    #[must_use]
    pub fn into_data(self) -> D {
        self.data
    }
}

impl<V, D> BaseEdge for EdgeWithData<V, D> {
    type Vertex = V;

    #[rustfmt::skip]
    fn from(&self) -> &V { &self.from }

    #[rustfmt::skip]
    fn to(&self) -> &V { &self.to }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl<V: PartialEq, D: PartialEq> PartialEq for EdgeWithData<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.weight.to_bits() == other.weight.to_bits()
            && self.data == other.data
    }
}

impl<V: Eq, D: Eq> Eq for EdgeWithData<V, D> {}

impl<V: Hash, D: Hash> Hash for EdgeWithData<V, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.to_bits().hash(state);
        self.data.hash(state);
    }
}
