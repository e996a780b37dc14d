use std::collections::VecDeque;

use tracing::trace;

use crate::error::{Error, Result};

/// A fixed-capacity buffer that keeps the most recently pushed entries.
///
/// Pushing past the capacity evicts the oldest entry. A capacity of zero retains nothing:
/// every push is dropped immediately.
///
/// ```
/// use command_list::prelude::BoundedHistory;
///
/// let mut history = BoundedHistory::new(2);
/// history.push(1);
/// history.push(2);
/// history.push(3);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.pop(), Ok(3));
/// assert_eq!(history.pop(), Ok(2));
/// assert!(history.pop().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BoundedHistory<C> {
    // Newest entry at the front.
    entries: VecDeque<C>,
    capacity: usize,
}

impl<C> BoundedHistory<C> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: C) {
        if self.capacity == 0 {
            trace!(message = "history.drop", reason = "zero capacity");
            return;
        }

        self.entries.push_front(entry);

        if self.entries.len() > self.capacity {
            self.entries.pop_back();
            trace!(message = "history.evict", capacity = self.capacity);
        }
    }

    /// Removes and returns the newest entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHistory`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<C> {
        self.entries.pop_front().ok_or(Error::EmptyHistory)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest entries that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;

        while self.entries.len() > self.capacity {
            self.entries.pop_back();
            trace!(message = "history.evict", capacity = self.capacity);
        }
    }

    /// Like [`set_capacity`](Self::set_capacity), for callers holding a signed limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] when `capacity` is negative or does not fit in `usize`.
    /// The buffer is left untouched in that case.
    pub fn try_set_capacity(&mut self, capacity: i64) -> Result<()> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))?;
        self.set_capacity(capacity);
        Ok(())
    }

    /// Iterates over the retained entries, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &C> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<C> Default for BoundedHistory<C> {
    fn default() -> Self {
        Self::new(0)
    }
}
