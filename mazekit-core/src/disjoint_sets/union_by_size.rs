//! Union-by-size disjoint sets with path-halving compression.

use std::{fmt, hash::Hash};

use crate::{ChainedHashMap, error::DisjointSetError};

use super::DisjointSets;

/// Disjoint sets that attach the smaller tree under the larger one and halve
/// find paths as they are walked.
///
/// Each item maps to a dense id through a [`ChainedHashMap`]; `parents` and
/// `sizes` are indexed by that id. Only roots carry a meaningful size.
///
/// # Examples
/// ```
/// use mazekit_core::{DisjointSets, UnionBySizeCompressingDisjointSets};
///
/// let mut sets = UnionBySizeCompressingDisjointSets::new();
/// for item in ["a", "b", "c"] {
///     sets.make_set(item);
/// }
/// assert!(sets.union(&"a", &"b")?);
/// assert!(!sets.union(&"b", &"a")?);
/// assert_eq!(sets.find_set(&"a")?, sets.find_set(&"b")?);
/// assert_ne!(sets.find_set(&"a")?, sets.find_set(&"c")?);
/// # Ok::<(), mazekit_core::DisjointSetError>(())
/// ```
pub struct UnionBySizeCompressingDisjointSets<T> {
    ids: ChainedHashMap<T, usize>,
    parents: Vec<usize>,
    sizes: Vec<usize>,
    set_count: usize,
}

impl<T> UnionBySizeCompressingDisjointSets<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: ChainedHashMap::new(),
            parents: Vec::new(),
            sizes: Vec::new(),
            set_count: 0,
        }
    }

    /// Number of registered items.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when no item has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    fn find_root(&mut self, mut node: usize) -> usize {
        while self.parents[node] != node {
            let grandparent = self.parents[self.parents[node]];
            self.parents[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Number of parent links between the item with `id` and its root,
    /// without compressing.
    #[cfg(test)]
    pub(super) fn depth_of(&self, id: usize) -> usize {
        let mut depth = 0;
        let mut node = id;
        while self.parents[node] != node {
            node = self.parents[node];
            depth += 1;
        }
        depth
    }
}

impl<T: Hash + Eq> UnionBySizeCompressingDisjointSets<T> {
    fn id_of(&self, item: &T, operation: &'static str) -> Result<usize, DisjointSetError> {
        self.ids
            .get(item)
            .copied()
            .ok_or(DisjointSetError::UnknownItem { operation })
    }

    /// Returns the dense id assigned to `item` by `make_set`.
    #[must_use]
    pub fn id(&self, item: &T) -> Option<usize> {
        self.ids.get(item).copied()
    }
}

impl<T> Default for UnionBySizeCompressingDisjointSets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for UnionBySizeCompressingDisjointSets<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionBySizeCompressingDisjointSets")
            .field("items", &self.parents.len())
            .field("set_count", &self.set_count)
            .finish_non_exhaustive()
    }
}

impl<T: Hash + Eq> DisjointSets<T> for UnionBySizeCompressingDisjointSets<T> {
    fn make_set(&mut self, item: T) {
        let id = self.parents.len();
        self.ids.put(item, id);
        self.parents.push(id);
        self.sizes.push(1);
        self.set_count += 1;
    }

    fn find_set(&mut self, item: &T) -> Result<usize, DisjointSetError> {
        let id = self.id_of(item, "find_set")?;
        Ok(self.find_root(id))
    }

    fn union(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        let left_id = self.id_of(left, "union")?;
        let right_id = self.id_of(right, "union")?;
        let left_root = self.find_root(left_id);
        let right_root = self.find_root(right_id);
        if left_root == right_root {
            return Ok(false);
        }

        // Ties attach the left root under the right root.
        let (parent, child) = if self.sizes[left_root] > self.sizes[right_root] {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parents[child] = parent;
        self.sizes[parent] += self.sizes[child];
        self.set_count -= 1;
        Ok(true)
    }
}
