//! Associative containers.
//!
//! [`ArrayMap`] is a small sequential map that scans its entries linearly. It
//! is the default chain type of [`ChainedHashMap`], which spreads entries over
//! an array of chains indexed by key hash and doubles that array whenever the
//! load factor crosses its configured threshold.
//!
//! Any type implementing [`MapChain`] can stand in for [`ArrayMap`] as the
//! per-bucket container.
//!
//! Iteration order is unspecified for both maps and may change after any
//! mutation: [`ArrayMap::remove`] moves the last entry into the vacated slot,
//! and a resize rehashes every entry into fresh chains.

mod array_map;
mod builder;
mod chained;

use std::{borrow::Borrow, num::NonZeroUsize};

pub use self::{
    array_map::{ArrayMap, DEFAULT_INITIAL_CAPACITY, IntoEntries, Iter as ArrayMapIter},
    builder::{
        ChainedHashMapBuilder, DEFAULT_INITIAL_CHAIN_CAPACITY, DEFAULT_INITIAL_CHAIN_COUNT,
        DEFAULT_RESIZING_LOAD_FACTOR_THRESHOLD,
    },
    chained::{ChainedHashMap, Iter},
};

/// Per-bucket container used by [`ChainedHashMap`].
///
/// Keys are compared by value through [`Eq`]; implementations never need to
/// hash.
pub trait MapChain<K, V> {
    /// Borrowing iterator over the live entries of the chain.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Owning iterator that drains the chain.
    type IntoEntries: Iterator<Item = (K, V)>;

    /// Creates an empty chain with room for `capacity` entries.
    fn with_capacity(capacity: NonZeroUsize) -> Self;

    /// Returns the value stored for `key`.
    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Returns a mutable reference to the value stored for `key`.
    fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Stores `value` under `key`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key`, returning the value that was stored for it.
    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Returns `true` when an entry exists for `key`.
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` when the chain holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every live entry exactly once.
    fn iter(&self) -> Self::Iter<'_>;

    /// Consumes the chain, yielding every entry exactly once.
    fn into_entries(self) -> Self::IntoEntries;
}
