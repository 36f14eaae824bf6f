//! Array-backed map used as a hash-map chain.

use std::{borrow::Borrow, fmt, num::NonZeroUsize, slice, vec};

use crate::error::MapConfigError;

use super::MapChain;

/// Capacity used by [`ArrayMap::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A map that stores its entries in a contiguous array and finds keys by
/// linear scan.
///
/// Storage doubles only when the array is exactly full at insertion time.
/// Removal moves the last entry into the vacated slot, so iteration order is
/// not stable across removals.
///
/// # Examples
/// ```
/// use mazekit_core::ArrayMap;
///
/// let mut map = ArrayMap::new();
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.put("a", 2), Some(1));
/// assert_eq!(map.get("a"), Some(&2));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct ArrayMap<K, V> {
    entries: Vec<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> ArrayMap<K, V> {
    /// Creates an empty map with [`DEFAULT_INITIAL_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_nonzero(
            NonZeroUsize::new(DEFAULT_INITIAL_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        )
    }

    /// Creates an empty map with room for `capacity` entries.
    ///
    /// # Errors
    /// Returns [`MapConfigError::ZeroCapacity`] when `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use mazekit_core::{ArrayMap, MapConfigError};
    ///
    /// let map = ArrayMap::<u8, u8>::try_with_capacity(4).expect("capacity is positive");
    /// assert_eq!(map.capacity(), 4);
    /// assert_eq!(
    ///     ArrayMap::<u8, u8>::try_with_capacity(0).err(),
    ///     Some(MapConfigError::ZeroCapacity),
    /// );
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, MapConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(MapConfigError::ZeroCapacity)?;
        Ok(Self::with_capacity_nonzero(capacity))
    }

    fn with_capacity_nonzero(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Number of entries the map can hold before its storage doubles.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Number of live entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Removes every entry while keeping the current capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the entries in their current internal order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .position(|entry| entry.key.borrow() == key)
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` when an entry exists for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry is overwritten in place and its previous value is
    /// returned; otherwise the entry is appended.
    pub fn put(&mut self, key: K, value: V) -> Option<V>
    where
        K: Eq,
    {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.grow_if_full();
        self.entries.push(Entry { key, value });
        None
    }

    /// Removes `key`, moving the last entry into its slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key)?;
        Some(self.entries.swap_remove(index).value)
    }

    fn grow_if_full(&mut self) {
        if self.entries.len() == self.capacity {
            let doubled = self.capacity.saturating_mul(2);
            self.entries.reserve_exact(doubled - self.entries.len());
            self.capacity = doubled;
        }
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V> MapChain<K, V> for ArrayMap<K, V> {
    type Iter<'a>
        = Iter<'a, K, V>
    where
        K: 'a,
        V: 'a;
    type IntoEntries = IntoEntries<K, V>;

    fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_capacity_nonzero(capacity)
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        Self::get(self, key)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        Self::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        Self::remove(self, key)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn into_entries(self) -> Self::IntoEntries {
        IntoEntries {
            inner: self.entries.into_iter(),
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`ArrayMap`].
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Owning iterator that drains an [`ArrayMap`].
pub struct IntoEntries<K, V> {
    inner: vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoEntries<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
