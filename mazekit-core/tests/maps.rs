//! Chained hash map behaviour through the public API, including a chain type
//! defined outside the crate.

use std::{borrow::Borrow, cell::Cell, collections::HashMap, num::NonZeroUsize, slice};

use mazekit_core::{ChainedHashMap, ChainedHashMapBuilder, MapChain, MapConfigError};
use rstest::rstest;

thread_local! {
    static CHAINS_CREATED: Cell<usize> = const { Cell::new(0) };
    static LAST_CHAIN_CAPACITY: Cell<usize> = const { Cell::new(0) };
}

/// Unordered chain backed by a `Vec` of pairs.
#[derive(Debug)]
struct VecChain<K, V> {
    entries: Vec<(K, V)>,
}

struct VecChainIter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for VecChainIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

impl<K: Eq, V> VecChain<K, V> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|(stored, _)| stored.borrow() == key)
    }
}

impl<K: Eq, V> MapChain<K, V> for VecChain<K, V> {
    type Iter<'a>
        = VecChainIter<'a, K, V>
    where
        K: 'a,
        V: 'a;
    type IntoEntries = std::vec::IntoIter<(K, V)>;

    fn with_capacity(capacity: NonZeroUsize) -> Self {
        CHAINS_CREATED.with(|count| count.set(count.get() + 1));
        LAST_CHAIN_CAPACITY.with(|last| last.set(capacity.get()));
        Self {
            entries: Vec::with_capacity(capacity.get()),
        }
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|index| &self.entries[index].1)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|index| &mut self.entries[index].1)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key)
            .map(|index| self.entries.swap_remove(index).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecChainIter {
            inner: self.entries.iter(),
        }
    }

    fn into_entries(self) -> Self::IntoEntries {
        self.entries.into_iter()
    }
}

fn vec_chained<K: std::hash::Hash + Eq, V>(
    threshold: f64,
    chains: usize,
) -> ChainedHashMap<K, V, VecChain<K, V>> {
    ChainedHashMapBuilder::new()
        .with_resizing_load_factor_threshold(threshold)
        .with_initial_chain_count(chains)
        .with_chain_initial_capacity(3)
        .build()
        .expect("configuration is valid")
}

#[test]
fn custom_chain_backs_the_map() {
    CHAINS_CREATED.with(|count| count.set(0));
    let mut map = vec_chained::<String, usize>(2.0, 4);
    for (index, word) in ["alpha", "beta", "gamma", "delta"].into_iter().enumerate() {
        assert_eq!(map.put(word.to_owned(), index), None);
    }
    assert_eq!(map.put("beta".to_owned(), 10), Some(1));
    assert_eq!(map.get("beta"), Some(&10));
    assert_eq!(map.remove("alpha"), Some(0));
    assert!(!map.contains_key("alpha"));
    assert_eq!(map.len(), 3);

    assert!(CHAINS_CREATED.with(Cell::get) >= 1);
    assert_eq!(LAST_CHAIN_CAPACITY.with(Cell::get), 3);
}

#[test]
fn custom_chain_survives_resizing() {
    let mut map = vec_chained::<u32, u32>(1.0, 2);
    for key in 0..64 {
        map.put(key, key + 1);
        assert!(map.load_factor() <= 1.0);
    }
    assert_eq!(map.chain_count(), 64);
    let collected: HashMap<u32, u32> = map.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(collected.len(), 64);
    assert!(collected.iter().all(|(key, value)| *value == key + 1));
}

#[test]
fn get_mut_updates_through_custom_chain() {
    let mut map = vec_chained::<&str, Vec<u8>>(2.0, 1);
    map.put("bytes", vec![1]);
    map.get_mut("bytes").expect("present").push(2);
    assert_eq!(map.get("bytes").map(Vec::as_slice), Some([1, 2].as_slice()));
}

#[test]
fn optional_keys_distinguish_absent_from_missing() {
    let mut map: ChainedHashMap<Option<&str>, u8> = ChainedHashMap::new();
    map.put(None, 1);
    map.put(Some("key"), 2);
    assert_eq!(map.get(&None::<&str>), Some(&1));
    assert_eq!(map.get(&Some("key")), Some(&2));
    assert_eq!(map.get(&Some("other")), None);
    assert_eq!(map.remove(&None::<&str>), Some(1));
    assert_eq!(map.len(), 1);
}

#[test]
fn collects_and_extends_from_pairs() {
    let mut map: ChainedHashMap<char, usize> = "hello".chars().zip(0..).collect();
    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&'l'), Some(&3));
    map.extend([('w', 5), ('h', 9)]);
    assert_eq!(map.len(), 5);
    assert_eq!(map.get(&'h'), Some(&9));
}

#[rstest]
#[case::zero_threshold(0.0, 8, 8, MapConfigError::InvalidLoadFactorThreshold { got: 0.0 })]
#[case::negative_threshold(-1.5, 8, 8, MapConfigError::InvalidLoadFactorThreshold { got: -1.5 })]
#[case::zero_chains(2.0, 0, 8, MapConfigError::ZeroChainCount)]
#[case::zero_capacity(2.0, 8, 0, MapConfigError::ZeroChainCapacity)]
fn builder_rejects_invalid_configuration(
    #[case] threshold: f64,
    #[case] chains: usize,
    #[case] capacity: usize,
    #[case] expected: MapConfigError,
) {
    let result = ChainedHashMapBuilder::new()
        .with_resizing_load_factor_threshold(threshold)
        .with_initial_chain_count(chains)
        .with_chain_initial_capacity(capacity)
        .build::<u8, u8, VecChain<u8, u8>>();
    assert_eq!(result.err(), Some(expected));
}

#[test]
fn builder_rejects_non_finite_threshold() {
    let result = ChainedHashMapBuilder::new()
        .with_resizing_load_factor_threshold(f64::INFINITY)
        .build::<u8, u8, VecChain<u8, u8>>();
    assert!(matches!(
        result.err(),
        Some(MapConfigError::InvalidLoadFactorThreshold { .. })
    ));
}
