//! Quick-find disjoint sets.

use std::hash::Hash;

use crate::{ChainedHashMap, error::DisjointSetError};

use super::DisjointSets;

/// Disjoint sets that store every item's representative directly.
///
/// `find_set` is a single lookup; `union` relabels every member of one set,
/// costing time linear in the number of registered items.
///
/// # Examples
/// ```
/// use mazekit_core::{DisjointSets, QuickFindDisjointSets};
///
/// let mut sets = QuickFindDisjointSets::default();
/// sets.make_set(1);
/// sets.make_set(2);
/// assert!(sets.union(&1, &2)?);
/// assert_eq!(sets.find_set(&1)?, sets.find_set(&2)?);
/// # Ok::<(), mazekit_core::DisjointSetError>(())
/// ```
pub struct QuickFindDisjointSets<T> {
    ids: ChainedHashMap<T, usize>,
    representatives: Vec<usize>,
}

impl<T> QuickFindDisjointSets<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: ChainedHashMap::new(),
            representatives: Vec::new(),
        }
    }

    /// Number of registered items.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.representatives.len() }

    /// Returns `true` when no item has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.representatives.is_empty() }
}

impl<T> Default for QuickFindDisjointSets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> QuickFindDisjointSets<T> {
    fn id_of(&self, item: &T, operation: &'static str) -> Result<usize, DisjointSetError> {
        self.ids
            .get(item)
            .copied()
            .ok_or(DisjointSetError::UnknownItem { operation })
    }
}

impl<T: Hash + Eq> DisjointSets<T> for QuickFindDisjointSets<T> {
    fn make_set(&mut self, item: T) {
        let id = self.representatives.len();
        self.ids.put(item, id);
        self.representatives.push(id);
    }

    fn find_set(&mut self, item: &T) -> Result<usize, DisjointSetError> {
        let id = self.id_of(item, "find_set")?;
        Ok(self.representatives[id])
    }

    fn union(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        let from = self.representatives[self.id_of(left, "union")?];
        let to = self.representatives[self.id_of(right, "union")?];
        if from == to {
            return Ok(false);
        }
        for representative in &mut self.representatives {
            if *representative == from {
                *representative = to;
            }
        }
        Ok(true)
    }
}
