use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{
    bounded_history::BoundedHistory,
    error::{Error, Result},
    list_command::ListCommand,
    traits::reversible_command::ReversibleCommand,
};

/// An ordered list of items whose most recent edits can be undone.
///
/// Every edit is recorded as a [`ListCommand`] in a [`BoundedHistory`] sized by the undo limit.
/// Once more than `undo_limit` edits have been made, the oldest ones can no longer be undone.
///
/// ```
/// use command_list::prelude::CommandList;
///
/// let mut list = CommandList::new(vec!["a", "b", "c"], 2);
/// list.add_item("d");
/// list.remove_item(0).unwrap();
/// list.move_up(2);
/// assert_eq!(list.items(), ["b", "d", "c"]);
///
/// list.undo();
/// list.undo();
/// assert_eq!(list.items(), ["a", "b", "c", "d"]);
///
/// // The add fell out of the two-entry history.
/// assert!(!list.can_undo());
/// ```
#[derive(Debug, Clone)]
pub struct CommandList<T> {
    items: Vec<T>,
    history: BoundedHistory<ListCommand<T>>,
}

impl<T> CommandList<T> {
    #[must_use]
    pub fn new(items: Vec<T>, undo_limit: usize) -> Self {
        Self {
            items,
            history: BoundedHistory::new(undo_limit),
        }
    }

    #[must_use]
    pub fn with_undo_limit(undo_limit: usize) -> Self {
        Self::new(Vec::new(), undo_limit)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn execute(&mut self, mut command: ListCommand<T>) {
        command.apply(&mut self.items);
        debug!(
            message = "list.apply",
            command = %command.description(),
            len = self.items.len()
        );

        self.history.push(command);
    }

    pub fn add_item(&mut self, item: T) {
        self.execute(ListCommand::add(item));
    }

    /// Removes the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index` is not a valid position. Nothing is
    /// changed or recorded in that case.
    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.execute(ListCommand::remove(index));
        Ok(())
    }

    /// Swaps the item at `index` with the one before it. Does nothing for the first item or an
    /// index past the end.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.items.len() {
            trace!(message = "list.move_up.ignored", index, len = self.items.len());
            return;
        }

        self.execute(ListCommand::move_up(index));
    }

    /// Swaps the item at `index` with the one after it. Does nothing for the last item or an
    /// index past the end.
    pub fn move_down(&mut self, index: usize) {
        if index.saturating_add(1) >= self.items.len() {
            trace!(message = "list.move_down.ignored", index, len = self.items.len());
            return;
        }

        self.execute(ListCommand::move_down(index));
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Reverses the most recent recorded edit. Does nothing when there is none.
    pub fn undo(&mut self) {
        if let Ok(mut command) = self.history.pop() {
            command.reverse(&mut self.items);
            debug!(
                message = "list.undo",
                command = %command.description(),
                len = self.items.len()
            );
        }
    }

    #[must_use]
    pub fn undo_limit(&self) -> usize {
        self.history.capacity()
    }

    /// Replaces the history with an empty one of the new size.
    ///
    /// Recorded edits are discarded, not reversed: the items stay as they are, but earlier
    /// edits can no longer be undone.
    pub fn set_undo_limit(&mut self, undo_limit: usize) {
        debug!(
            message = "list.undo_limit",
            from = self.history.capacity(),
            to = undo_limit,
            discarded = self.history.len()
        );
        self.history = BoundedHistory::new(undo_limit);
    }

    /// Like [`set_undo_limit`](Self::set_undo_limit), for callers holding a signed limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] when `undo_limit` is negative or does not fit in
    /// `usize`. The history is kept in that case.
    pub fn try_set_undo_limit(&mut self, undo_limit: i64) -> Result<()> {
        let limit = usize::try_from(undo_limit).map_err(|_| Error::InvalidCapacity(undo_limit))?;
        self.set_undo_limit(limit);
        Ok(())
    }

    /// Descriptions of the edits that can be undone, newest first.
    #[must_use]
    pub fn undo_descriptions(&self) -> Vec<Cow<'_, str>> {
        self.history.iter().map(ListCommand::description).collect()
    }
}

impl<T> Default for CommandList<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use tracing_test::traced_test;

    fn abc(undo_limit: usize) -> CommandList<&'static str> {
        CommandList::new(vec!["a", "b", "c"], undo_limit)
    }

    #[test]
    fn test_new() {
        let list = abc(5);

        assert_eq!(list.items(), ["a", "b", "c"]);
        assert_eq!(list.undo_limit(), 5);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_with_undo_limit() {
        let list = CommandList::<i32>::with_undo_limit(3);

        assert!(list.is_empty());
        assert_eq!(list.undo_limit(), 3);
    }

    #[test]
    fn test_add_and_undo() {
        let mut list = abc(5);

        list.add_item("x");
        assert_eq!(list.items(), ["a", "b", "c", "x"]);
        assert!(list.can_undo());

        list.undo();
        assert_eq!(list.items(), ["a", "b", "c"]);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_remove_and_undo() {
        let mut list = abc(5);

        list.remove_item(1).unwrap();
        assert_eq!(list.items(), ["a", "c"]);

        list.undo();
        assert_eq!(list.items(), ["a", "b", "c"]);
        assert_eq!(list.get(1), Some(&"b"));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = abc(5);

        assert_eq!(
            list.remove_item(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.items(), ["a", "b", "c"]);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_remove_from_empty() {
        let mut list = CommandList::<i32>::with_undo_limit(5);

        assert_eq!(
            list.remove_item(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_move_up_and_undo() {
        let mut list = abc(5);

        list.move_up(1);
        assert_eq!(list.items(), ["b", "a", "c"]);

        list.undo();
        assert_eq!(list.items(), ["a", "b", "c"]);
    }

    #[test]
    fn test_move_down_and_undo() {
        let mut list = abc(5);

        list.move_down(1);
        assert_eq!(list.items(), ["a", "c", "b"]);

        list.undo();
        assert_eq!(list.items(), ["a", "b", "c"]);
    }

    #[test]
    fn test_move_at_boundaries_is_ignored() {
        let mut list = abc(5);

        list.move_up(0);
        list.move_up(3);
        list.move_down(2);
        list.move_down(10);
        list.move_down(usize::MAX);

        assert_eq!(list.items(), ["a", "b", "c"]);
        assert!(!list.can_undo());

        list.add_item("d");
        list.move_up(0);
        list.move_down(3);
        assert_eq!(list.undo_descriptions(), vec!["Add item"]);
    }

    #[test]
    fn test_move_on_empty_list_is_ignored() {
        let mut list = CommandList::<i32>::with_undo_limit(5);

        list.move_up(0);
        list.move_down(0);

        assert!(list.is_empty());
        assert!(!list.can_undo());
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut list = abc(5);

        list.undo();

        assert_eq!(list.items(), ["a", "b", "c"]);
    }

    #[test]
    fn test_scenario_with_eviction() {
        let mut list = abc(2);

        list.add_item("d");
        assert_eq!(list.items(), ["a", "b", "c", "d"]);
        list.remove_item(0).unwrap();
        assert_eq!(list.items(), ["b", "c", "d"]);
        list.move_up(2);
        assert_eq!(list.items(), ["b", "d", "c"]);

        assert_eq!(
            list.undo_descriptions(),
            vec!["Move item 2 up", "Remove item at 0"]
        );

        list.undo();
        assert_eq!(list.items(), ["b", "c", "d"]);
        list.undo();
        assert_eq!(list.items(), ["a", "b", "c", "d"]);
        assert!(!list.can_undo());

        list.undo();
        assert_eq!(list.items(), ["a", "b", "c", "d"]);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_zero_undo_limit() {
        let mut list = abc(0);

        list.add_item("d");
        list.remove_item(0).unwrap();

        assert_eq!(list.items(), ["b", "c", "d"]);
        assert!(!list.can_undo());

        list.undo();
        assert_eq!(list.items(), ["b", "c", "d"]);
    }

    #[test]
    fn test_default_has_no_undo() {
        let mut list = CommandList::default();
        list.add_item(1);

        assert_eq!(list.items(), [1]);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_set_undo_limit_discards_history() {
        let mut list = abc(5);
        list.add_item("d");
        list.add_item("e");

        list.set_undo_limit(3);
        assert_eq!(list.undo_limit(), 3);
        assert!(!list.can_undo());
        assert_eq!(list.items(), ["a", "b", "c", "d", "e"]);

        list.remove_item(0).unwrap();
        list.undo();
        assert_eq!(list.items(), ["a", "b", "c", "d", "e"]);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_try_set_undo_limit() {
        let mut list = abc(5);
        list.add_item("d");

        assert_eq!(list.try_set_undo_limit(-2), Err(Error::InvalidCapacity(-2)));
        assert_eq!(list.undo_limit(), 5);
        assert!(list.can_undo());

        assert_eq!(list.try_set_undo_limit(1), Ok(()));
        assert_eq!(list.undo_limit(), 1);
        assert!(!list.can_undo());
    }

    #[test]
    fn test_into_items() {
        let mut list = abc(5);
        list.add_item("d");

        assert_eq!(list.into_items(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_random_operations_undo_to_snapshots() {
        let mut rng = rand::thread_rng();
        let undo_limit = rng.gen_range(1..10);
        let mut list = CommandList::new((0..5).collect::<Vec<i32>>(), undo_limit);

        // Snapshot taken before every recorded edit.
        let mut snapshots: Vec<Vec<i32>> = Vec::new();

        for step in 0..200 {
            let before = list.items().to_vec();
            let len = list.len();

            match rng.gen_range(0..4) {
                0 => list.add_item(step + 1000),
                1 if len > 0 => list.remove_item(rng.gen_range(0..len)).unwrap(),
                2 if len > 0 => list.move_up(rng.gen_range(0..len)),
                3 if len > 0 => list.move_down(rng.gen_range(0..len)),
                _ => {}
            }

            if list.items() != before.as_slice() {
                snapshots.push(before);
            }
        }

        let undoable = snapshots.len().min(undo_limit);
        for expected in snapshots.iter().rev().take(undoable) {
            assert!(list.can_undo());
            list.undo();
            assert_eq!(list.items(), expected.as_slice());
        }

        assert!(!list.can_undo());
    }

    #[traced_test]
    #[test]
    fn test_logs_apply_and_undo() {
        let mut list = abc(5);

        list.remove_item(2).unwrap();
        list.undo();

        assert!(logs_contain("list.apply"));
        assert!(logs_contain("Remove item at 2"));
        assert!(logs_contain("list.undo"));
    }
}
