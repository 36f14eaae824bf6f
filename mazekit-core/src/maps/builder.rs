//! Builder and validation for [`ChainedHashMap`] configuration.

use std::{
    hash::{BuildHasher, Hash, RandomState},
    num::NonZeroUsize,
};

use crate::error::MapConfigError;

use super::{ChainedHashMap, MapChain};

/// Load factor above which a [`ChainedHashMap`] doubles its chain array.
pub const DEFAULT_RESIZING_LOAD_FACTOR_THRESHOLD: f64 = 2.0;
/// Number of chains a [`ChainedHashMap`] starts with.
pub const DEFAULT_INITIAL_CHAIN_COUNT: usize = 8;
/// Capacity of each chain created by a [`ChainedHashMap`].
pub const DEFAULT_INITIAL_CHAIN_CAPACITY: usize = 8;

pub(super) const DEFAULT_CHAIN_COUNT: NonZeroUsize = non_zero(DEFAULT_INITIAL_CHAIN_COUNT);
pub(super) const DEFAULT_CHAIN_CAPACITY: NonZeroUsize = non_zero(DEFAULT_INITIAL_CHAIN_CAPACITY);

const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => NonZeroUsize::MIN,
    }
}

/// Configures and constructs [`ChainedHashMap`] instances.
///
/// # Examples
/// ```
/// use mazekit_core::{ChainedHashMap, ChainedHashMapBuilder};
///
/// let map: ChainedHashMap<&str, u32> = ChainedHashMapBuilder::new()
///     .with_resizing_load_factor_threshold(0.75)
///     .with_initial_chain_count(2)
///     .with_chain_initial_capacity(4)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(map.chain_count(), 2);
/// assert!(map.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ChainedHashMapBuilder<S = RandomState> {
    resizing_load_factor_threshold: f64,
    initial_chain_count: usize,
    chain_initial_capacity: usize,
    hash_builder: S,
}

impl Default for ChainedHashMapBuilder {
    fn default() -> Self {
        Self {
            resizing_load_factor_threshold: DEFAULT_RESIZING_LOAD_FACTOR_THRESHOLD,
            initial_chain_count: DEFAULT_INITIAL_CHAIN_COUNT,
            chain_initial_capacity: DEFAULT_INITIAL_CHAIN_CAPACITY,
            hash_builder: RandomState::new(),
        }
    }
}

impl ChainedHashMapBuilder {
    /// Creates a builder populated with the default parameters.
    ///
    /// # Examples
    /// ```
    /// use mazekit_core::ChainedHashMapBuilder;
    ///
    /// let builder = ChainedHashMapBuilder::new();
    /// assert_eq!(builder.resizing_load_factor_threshold(), 2.0);
    /// assert_eq!(builder.initial_chain_count(), 8);
    /// assert_eq!(builder.chain_initial_capacity(), 8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> ChainedHashMapBuilder<S> {
    /// Overrides the load factor above which the map resizes.
    #[must_use]
    pub fn with_resizing_load_factor_threshold(mut self, threshold: f64) -> Self {
        self.resizing_load_factor_threshold = threshold;
        self
    }

    /// Returns the configured resizing load-factor threshold.
    #[must_use]
    #[rustfmt::skip]
    pub fn resizing_load_factor_threshold(&self) -> f64 { self.resizing_load_factor_threshold }

    /// Overrides the number of chains the map starts with.
    #[must_use]
    pub fn with_initial_chain_count(mut self, count: usize) -> Self {
        self.initial_chain_count = count;
        self
    }

    /// Returns the configured initial chain count.
    #[must_use]
    #[rustfmt::skip]
    pub fn initial_chain_count(&self) -> usize { self.initial_chain_count }

    /// Overrides the capacity of chains created by the map.
    #[must_use]
    pub fn with_chain_initial_capacity(mut self, capacity: usize) -> Self {
        self.chain_initial_capacity = capacity;
        self
    }

    /// Returns the configured chain capacity.
    #[must_use]
    #[rustfmt::skip]
    pub fn chain_initial_capacity(&self) -> usize { self.chain_initial_capacity }

    /// Replaces the hasher builder used to index chains.
    ///
    /// # Examples
    /// ```
    /// use std::hash::{BuildHasherDefault, DefaultHasher};
    ///
    /// use mazekit_core::{ArrayMap, ChainedHashMap, ChainedHashMapBuilder};
    ///
    /// let map: ChainedHashMap<u32, u32, ArrayMap<u32, u32>, BuildHasherDefault<DefaultHasher>> =
    ///     ChainedHashMapBuilder::new()
    ///         .with_hasher(BuildHasherDefault::default())
    ///         .build()
    ///         .expect("configuration is valid");
    /// assert_eq!(map.len(), 0);
    /// ```
    #[must_use]
    pub fn with_hasher<T>(self, hash_builder: T) -> ChainedHashMapBuilder<T> {
        ChainedHashMapBuilder {
            resizing_load_factor_threshold: self.resizing_load_factor_threshold,
            initial_chain_count: self.initial_chain_count,
            chain_initial_capacity: self.chain_initial_capacity,
            hash_builder,
        }
    }

    /// Validates the configuration and constructs a [`ChainedHashMap`].
    ///
    /// # Errors
    /// Returns [`MapConfigError::InvalidLoadFactorThreshold`] when the
    /// threshold is not a positive finite number,
    /// [`MapConfigError::ZeroChainCount`] when no chains are requested and
    /// [`MapConfigError::ZeroChainCapacity`] when chains would have no room.
    ///
    /// # Examples
    /// ```
    /// use mazekit_core::{ChainedHashMap, ChainedHashMapBuilder, MapConfigError};
    ///
    /// let result: Result<ChainedHashMap<u8, u8>, _> = ChainedHashMapBuilder::new()
    ///     .with_initial_chain_count(0)
    ///     .build();
    /// assert_eq!(result.err(), Some(MapConfigError::ZeroChainCount));
    /// ```
    pub fn build<K, V, C>(self) -> Result<ChainedHashMap<K, V, C, S>, MapConfigError>
    where
        K: Hash + Eq,
        C: MapChain<K, V>,
        S: BuildHasher,
    {
        let threshold = self.resizing_load_factor_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(MapConfigError::InvalidLoadFactorThreshold { got: threshold });
        }
        let chain_count =
            NonZeroUsize::new(self.initial_chain_count).ok_or(MapConfigError::ZeroChainCount)?;
        let chain_capacity = NonZeroUsize::new(self.chain_initial_capacity)
            .ok_or(MapConfigError::ZeroChainCapacity)?;

        Ok(ChainedHashMap::from_parts(
            threshold,
            chain_count,
            chain_capacity,
            self.hash_builder,
        ))
    }
}
