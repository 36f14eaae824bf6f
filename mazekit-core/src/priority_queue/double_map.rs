//! Priority queue backed by an ordered priority index and an item map.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
    hash::Hash,
};

use ordered_float::OrderedFloat;

use crate::error::PriorityQueueError;

use super::{ExtrinsicMinPq, checked_priority};

/// Min-priority queue keeping two maps in step: item to priority, and
/// priority to the set of items holding it.
///
/// Every operation is logarithmic in the number of distinct priorities.
/// Items are stored twice, hence the `Clone` bound.
///
/// # Examples
/// ```
/// use mazekit_core::{DoubleMapMinPq, ExtrinsicMinPq};
///
/// let mut queue = DoubleMapMinPq::new();
/// queue.add("far", 9.0)?;
/// queue.add("near", 1.0)?;
/// queue.change_priority(&"far", 0.5)?;
/// assert_eq!(queue.remove_min()?, "far");
/// assert_eq!(queue.remove_min()?, "near");
/// assert!(queue.is_empty());
/// # Ok::<(), mazekit_core::PriorityQueueError>(())
/// ```
pub struct DoubleMapMinPq<T> {
    priorities: HashMap<T, OrderedFloat<f64>>,
    by_priority: BTreeMap<OrderedFloat<f64>, HashSet<T>>,
}

impl<T> DoubleMapMinPq<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            priorities: HashMap::new(),
            by_priority: BTreeMap::new(),
        }
    }
}

impl<T> Default for DoubleMapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DoubleMapMinPq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleMapMinPq")
            .field("len", &self.priorities.len())
            .field("distinct_priorities", &self.by_priority.len())
            .finish()
    }
}

impl<T: Hash + Eq + Clone> DoubleMapMinPq<T> {
    fn detach(&mut self, item: &T, priority: OrderedFloat<f64>) {
        if let Some(bucket) = self.by_priority.get_mut(&priority) {
            bucket.remove(item);
            if bucket.is_empty() {
                self.by_priority.remove(&priority);
            }
        }
    }
}

impl<T: Hash + Eq + Clone> ExtrinsicMinPq<T> for DoubleMapMinPq<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<(), PriorityQueueError> {
        let priority = OrderedFloat(checked_priority(priority)?);
        if self.priorities.contains_key(&item) {
            return Err(PriorityQueueError::DuplicateItem);
        }
        self.by_priority
            .entry(priority)
            .or_default()
            .insert(item.clone());
        self.priorities.insert(item, priority);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.priorities.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T, PriorityQueueError> {
        self.by_priority
            .first_key_value()
            .and_then(|(_, bucket)| bucket.iter().next())
            .ok_or(PriorityQueueError::Empty)
    }

    fn remove_min(&mut self) -> Result<T, PriorityQueueError> {
        let mut lowest = self
            .by_priority
            .first_entry()
            .ok_or(PriorityQueueError::Empty)?;
        let item = lowest
            .get()
            .iter()
            .next()
            .cloned()
            .ok_or(PriorityQueueError::Empty)?;
        lowest.get_mut().remove(&item);
        if lowest.get().is_empty() {
            lowest.remove();
        }
        self.priorities.remove(&item);
        Ok(item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PriorityQueueError> {
        let priority = OrderedFloat(checked_priority(priority)?);
        let slot = self
            .priorities
            .get_mut(item)
            .ok_or(PriorityQueueError::MissingItem)?;
        let previous = std::mem::replace(slot, priority);
        if previous == priority {
            return Ok(());
        }
        self.detach(item, previous);
        self.by_priority
            .entry(priority)
            .or_default()
            .insert(item.clone());
        Ok(())
    }

    fn len(&self) -> usize {
        self.priorities.len()
    }
}
