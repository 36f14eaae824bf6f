//! Disjoint-set (union-find) structures over arbitrary hashable items.
//!
//! Items are registered once with [`DisjointSets::make_set`], which assigns
//! them a dense id and a singleton set. [`DisjointSets::find_set`] returns the
//! id of the representative of an item's set; two items are in the same set
//! exactly when their representatives match.
//!
//! [`UnionBySizeCompressingDisjointSets`] is the strategy used by the MST
//! solver. [`QuickFindDisjointSets`] is a simple baseline with constant-time
//! finds and linear-time unions.

mod quick_find;
mod union_by_size;

use crate::error::DisjointSetError;

pub use self::{quick_find::QuickFindDisjointSets, union_by_size::UnionBySizeCompressingDisjointSets};

/// Union-find capability consumed by the MST solver.
pub trait DisjointSets<T> {
    /// Registers `item` as a new singleton set.
    ///
    /// Calling this twice for the same item leaves the structure in an
    /// unspecified state; callers must register each item once.
    fn make_set(&mut self, item: T);

    /// Returns the id of the representative of the set containing `item`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownItem`] when `item` was never
    /// registered.
    fn find_set(&mut self, item: &T) -> Result<usize, DisjointSetError>;

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// both items already shared a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownItem`] when either item was never
    /// registered.
    fn union(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError>;
}

#[cfg(test)]
mod tests;
