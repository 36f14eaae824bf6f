//! Min-priority queues whose priorities live outside the items.
//!
//! The shortest-path solver needs to raise or lower the priority of an item
//! that is already queued, so the queues here keep an item index next to the
//! ordering structure. Priorities are `f64`; `NaN` is rejected because it has
//! no place in the order.

mod array_heap;
mod double_map;

use crate::error::PriorityQueueError;

pub use self::{array_heap::ArrayHeapMinPq, double_map::DoubleMapMinPq};

/// Priority-queue capability consumed by the shortest-path solver.
///
/// Each item may be queued at most once. Among items with equal priority the
/// removal order is unspecified.
pub trait ExtrinsicMinPq<T> {
    /// Queues `item` with the given priority.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::DuplicateItem`] when `item` is already
    /// queued and [`PriorityQueueError::NanPriority`] when `priority` is NaN.
    fn add(&mut self, item: T, priority: f64) -> Result<(), PriorityQueueError>;

    /// Returns `true` when `item` is queued.
    fn contains(&self, item: &T) -> bool;

    /// Returns an item with the lowest priority without removing it.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::Empty`] when nothing is queued.
    fn peek_min(&self) -> Result<&T, PriorityQueueError>;

    /// Removes and returns an item with the lowest priority.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::Empty`] when nothing is queued.
    fn remove_min(&mut self) -> Result<T, PriorityQueueError>;

    /// Replaces the priority of a queued item. Both decreases and increases
    /// are allowed.
    ///
    /// # Errors
    /// Returns [`PriorityQueueError::MissingItem`] when `item` is not queued
    /// and [`PriorityQueueError::NanPriority`] when `priority` is NaN.
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PriorityQueueError>;

    /// Number of queued items.
    fn len(&self) -> usize;

    /// Returns `true` when nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn checked_priority(priority: f64) -> Result<f64, PriorityQueueError> {
    if priority.is_nan() {
        Err(PriorityQueueError::NanPriority)
    } else {
        Ok(priority)
    }
}
