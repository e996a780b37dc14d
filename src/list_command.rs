use std::borrow::Cow;

use crate::traits::reversible_command::ReversibleCommand;

/// One reversible edit of a `Vec<T>`.
///
/// # Arguments
///
/// * `index` - The position the edit targets. `Remove` needs an existing element there,
///   `MoveUp` needs an element before it and `MoveDown` needs one after it.
///   [`CommandList`](crate::command_list::CommandList) checks this before constructing them.
///
/// # Panics
///
/// Never. A command whose `index` does not satisfy the above leaves the list untouched on
/// `apply`, and its `reverse` is a no-op as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand<T> {
    /// Appends `item`. The item is held here while it is not in the list.
    Add { item: Option<T> },
    /// Removes the element at `index`. The removed element is held here until reversed.
    Remove { index: usize, item: Option<T> },
    /// Swaps the element at `index` with the one before it.
    MoveUp { index: usize },
    /// Swaps the element at `index` with the one after it.
    MoveDown { index: usize },
}

impl<T> ListCommand<T> {
    #[must_use]
    pub fn add(item: T) -> Self {
        Self::Add { item: Some(item) }
    }

    #[must_use]
    pub fn remove(index: usize) -> Self {
        Self::Remove { index, item: None }
    }

    #[must_use]
    pub fn move_up(index: usize) -> Self {
        Self::MoveUp { index }
    }

    #[must_use]
    pub fn move_down(index: usize) -> Self {
        Self::MoveDown { index }
    }
}

/// Swaps `index` with `other` when both are positions in `items`, otherwise does nothing.
fn swap_within<T>(items: &mut [T], index: usize, other: Option<usize>) {
    if let Some(other) = other.filter(|&other| index < items.len() && other < items.len()) {
        items.swap(index, other);
    }
}

impl<T> ReversibleCommand for ListCommand<T> {
    type Target = Vec<T>;

    fn apply(&mut self, items: &mut Vec<T>) {
        match self {
            Self::Add { item } => {
                if let Some(item) = item.take() {
                    items.push(item);
                }
            }
            // The element is moved out before anything else touches the list, so `reverse`
            // puts back exactly the value that was at `index`.
            Self::Remove { index, item } => {
                if *index < items.len() {
                    *item = Some(items.remove(*index));
                }
            }
            Self::MoveUp { index } => swap_within(items, *index, index.checked_sub(1)),
            Self::MoveDown { index } => swap_within(items, *index, index.checked_add(1)),
        }
    }

    fn reverse(&mut self, items: &mut Vec<T>) {
        match self {
            // Assumes the appended element is still last.
            Self::Add { item } => *item = items.pop(),
            Self::Remove { index, item } => {
                if *index <= items.len() {
                    if let Some(item) = item.take() {
                        items.insert(*index, item);
                    }
                }
            }
            Self::MoveUp { index } => swap_within(items, *index, index.checked_sub(1)),
            Self::MoveDown { index } => swap_within(items, *index, index.checked_add(1)),
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            Self::Add { .. } => Cow::Borrowed("Add item"),
            Self::Remove { index, .. } => Cow::Owned(format!("Remove item at {index}")),
            Self::MoveUp { index } => Cow::Owned(format!("Move item {index} up")),
            Self::MoveDown { index } => Cow::Owned(format!("Move item {index} down")),
        }
    }
}
