//! Separate-chaining hash map.

use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash, RandomState},
    iter::FusedIterator,
    marker::PhantomData,
    num::NonZeroUsize,
    slice,
};

use tracing::debug;

use super::{
    ArrayMap, DEFAULT_RESIZING_LOAD_FACTOR_THRESHOLD, MapChain,
    builder::{DEFAULT_CHAIN_CAPACITY, DEFAULT_CHAIN_COUNT},
};

/// A hash map that resolves collisions by chaining entries into per-index
/// [`MapChain`] containers.
///
/// Chains are created lazily on first insertion and discarded once they
/// become empty. Whenever `len / chain_count` exceeds the resizing load-factor
/// threshold the chain array doubles and every entry is re-inserted against
/// the new chain count.
///
/// Every key, `None` included when `K` is an `Option`, is placed by the
/// map's hasher. Chain placement is therefore only reproducible across maps
/// built with a deterministic `BuildHasher`.
///
/// # Examples
/// ```
/// use mazekit_core::ChainedHashMap;
///
/// let mut map = ChainedHashMap::new();
/// for key in 0..100_u32 {
///     map.put(key, key * 2);
/// }
/// assert_eq!(map.len(), 100);
/// assert_eq!(map.get(&21), Some(&42));
/// assert_eq!(map.remove(&21), Some(42));
/// assert!(!map.contains_key(&21));
/// ```
pub struct ChainedHashMap<K, V, C = ArrayMap<K, V>, S = RandomState> {
    chains: Vec<Option<C>>,
    len: usize,
    resizing_load_factor_threshold: f64,
    chain_initial_capacity: NonZeroUsize,
    hash_builder: S,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty map using the default configuration.
    ///
    /// See [`super::ChainedHashMapBuilder`] for the defaults and for
    /// overriding them.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C, S> ChainedHashMap<K, V, C, S> {
    /// Creates an empty map using the default configuration and the given
    /// hasher builder.
    ///
    /// # Examples
    /// ```
    /// use std::hash::{BuildHasherDefault, DefaultHasher};
    ///
    /// use mazekit_core::{ArrayMap, ChainedHashMap};
    ///
    /// let map: ChainedHashMap<u8, u8, ArrayMap<u8, u8>, _> =
    ///     ChainedHashMap::with_hasher(BuildHasherDefault::<DefaultHasher>::default());
    /// assert_eq!(map.chain_count(), 8);
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(
            DEFAULT_RESIZING_LOAD_FACTOR_THRESHOLD,
            DEFAULT_CHAIN_COUNT,
            DEFAULT_CHAIN_CAPACITY,
            hash_builder,
        )
    }

    pub(super) fn from_parts(
        resizing_load_factor_threshold: f64,
        chain_count: NonZeroUsize,
        chain_initial_capacity: NonZeroUsize,
        hash_builder: S,
    ) -> Self {
        Self {
            chains: empty_chains(chain_count.get()),
            len: 0,
            resizing_load_factor_threshold,
            chain_initial_capacity,
            hash_builder,
            _entries: PhantomData,
        }
    }

    /// Number of key/value pairs stored in the map.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Current length of the chain array.
    #[must_use]
    #[rustfmt::skip]
    pub fn chain_count(&self) -> usize { self.chains.len() }

    /// Ratio of stored entries to chains.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.chains.len() as f64
    }

    /// Returns the hasher builder used to index chains.
    #[must_use]
    #[rustfmt::skip]
    pub fn hasher(&self) -> &S { &self.hash_builder }

    /// Removes every entry while keeping the current chain count.
    pub fn clear(&mut self) {
        self.chains.iter_mut().for_each(|chain| *chain = None);
        self.len = 0;
    }

    #[cfg(test)]
    pub(super) fn occupied_chains(&self) -> usize {
        self.chains.iter().filter(|chain| chain.is_some()).count()
    }
}

impl<K, V, C, S> ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq,
    C: MapChain<K, V>,
    S: BuildHasher,
{
    fn chain_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        normalise_index(self.hash_builder.hash_one(key), self.chains.len())
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chains[self.chain_index(key)].as_ref()?.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.chain_index(key);
        self.chains[index].as_mut()?.get_mut(key)
    }

    /// Returns `true` when an entry exists for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chains[self.chain_index(key)]
            .as_ref()
            .is_some_and(|chain| chain.contains_key(key))
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Inserting a new key may trigger a resize, after which iteration order
    /// changes.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.insert_without_resize(key, value);
        while self.load_factor() > self.resizing_load_factor_threshold {
            self.resize();
        }
        previous
    }

    fn insert_without_resize(&mut self, key: K, value: V) -> Option<V> {
        let index = self.chain_index(&key);
        let capacity = self.chain_initial_capacity;
        let previous = self.chains[index]
            .get_or_insert_with(|| C::with_capacity(capacity))
            .put(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    fn resize(&mut self) {
        let previous_count = self.chains.len();
        let doubled = previous_count.saturating_mul(2);
        let old_chains = std::mem::replace(&mut self.chains, empty_chains(doubled));
        self.len = 0;
        for (key, value) in old_chains
            .into_iter()
            .flatten()
            .flat_map(<C as MapChain<K, V>>::into_entries)
        {
            self.insert_without_resize(key, value);
        }
        debug!(
            from_chains = previous_count,
            to_chains = doubled,
            entries = self.len,
            "resized chained hash map"
        );
    }

    /// Removes `key`, returning the value that was stored for it.
    ///
    /// A chain left empty by the removal is discarded.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.chain_index(key);
        let slot = &mut self.chains[index];
        let chain = slot.as_mut()?;
        let removed = chain.remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        if chain.is_empty() {
            *slot = None;
        }
        removed
    }

    /// Iterates over every entry exactly once, in unspecified order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            chains: self.chains.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// Maps a 64-bit hash onto `[0, chain_count)`.
///
/// The hash is read as a signed hash code; a negative remainder is corrected
/// by adding `chain_count` once.
fn normalise_index(hash: u64, chain_count: usize) -> usize {
    let count = chain_count as i64;
    let mut index = (hash as i64) % count;
    if index < 0 {
        index += count;
    }
    index as usize
}

fn empty_chains<C>(count: usize) -> Vec<Option<C>> {
    std::iter::repeat_with(|| None).take(count).collect()
}

impl<K, V, C, S> fmt::Debug for ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    C: MapChain<K, V>,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, S> FromIterator<(K, V)> for ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq,
    C: MapChain<K, V>,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, C, S> Extend<(K, V)> for ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq,
    C: MapChain<K, V>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V, C, S> IntoIterator for &'a ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq,
    C: MapChain<K, V>,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`ChainedHashMap`].
///
/// Missing chains are skipped; each chain is walked in its own order.
pub struct Iter<'a, K, V, C>
where
    C: MapChain<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    chains: slice::Iter<'a, Option<C>>,
    current: Option<C::Iter<'a>>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: MapChain<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|chain| chain.next()) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
            let chain = self.chains.by_ref().find_map(Option::as_ref)?;
            self.current = Some(chain.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C>
where
    C: MapChain<K, V> + 'a,
    K: 'a,
    V: 'a,
{
}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C>
where
    C: MapChain<K, V> + 'a,
    K: 'a,
    V: 'a,
{
}
