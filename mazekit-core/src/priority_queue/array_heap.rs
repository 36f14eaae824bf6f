//! Binary-heap priority queue with an item position index.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::PriorityQueueError;

use super::{ExtrinsicMinPq, checked_priority};

struct Slot<T> {
    item: T,
    priority: f64,
}

/// Array-backed binary min-heap that tracks where every item sits, so a
/// priority change can sift the item in place.
///
/// `add`, `remove_min` and `change_priority` are logarithmic; `peek_min` and
/// `contains` are constant time.
///
/// # Examples
/// ```
/// use mazekit_core::{ArrayHeapMinPq, ExtrinsicMinPq};
///
/// let mut queue = ArrayHeapMinPq::new();
/// for (item, priority) in [('a', 3.0), ('b', 1.0), ('c', 2.0)] {
///     queue.add(item, priority)?;
/// }
/// queue.change_priority(&'b', 5.0)?;
/// assert_eq!(*queue.peek_min()?, 'c');
/// # Ok::<(), mazekit_core::PriorityQueueError>(())
/// ```
pub struct ArrayHeapMinPq<T> {
    heap: Vec<Slot<T>>,
    positions: HashMap<T, usize>,
}

impl<T> ArrayHeapMinPq<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> Default for ArrayHeapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ArrayHeapMinPq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeapMinPq")
            .field("len", &self.heap.len())
            .finish_non_exhaustive()
    }
}

impl<T: Hash + Eq + Clone> ArrayHeapMinPq<T> {
    fn less(&self, left: usize, right: usize) -> bool {
        self.heap[left].priority < self.heap[right].priority
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        for index in [left, right] {
            if let Some(position) = self.positions.get_mut(&self.heap[index].item) {
                *position = index;
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks the heap order and the position index.
    #[cfg(test)]
    pub(super) fn is_consistent(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|index| !self.less(index, (index - 1) / 2));
        let indexed = self.positions.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(index, slot)| self.positions.get(&slot.item) == Some(&index));
        ordered && indexed
    }
}

impl<T: Hash + Eq + Clone> ExtrinsicMinPq<T> for ArrayHeapMinPq<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<(), PriorityQueueError> {
        let priority = checked_priority(priority)?;
        if self.positions.contains_key(&item) {
            return Err(PriorityQueueError::DuplicateItem);
        }
        let index = self.heap.len();
        self.positions.insert(item.clone(), index);
        self.heap.push(Slot { item, priority });
        self.sift_up(index);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T, PriorityQueueError> {
        self.heap
            .first()
            .map(|slot| &slot.item)
            .ok_or(PriorityQueueError::Empty)
    }

    fn remove_min(&mut self) -> Result<T, PriorityQueueError> {
        if self.heap.is_empty() {
            return Err(PriorityQueueError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let slot = self.heap.pop().ok_or(PriorityQueueError::Empty)?;
        self.positions.remove(&slot.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(slot.item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PriorityQueueError> {
        let priority = checked_priority(priority)?;
        let index = *self
            .positions
            .get(item)
            .ok_or(PriorityQueueError::MissingItem)?;
        let previous = std::mem::replace(&mut self.heap[index].priority, priority);
        if priority < previous {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
