use thiserror::Error;

/// Errors produced by [`BoundedHistory`](crate::bounded_history::BoundedHistory)
/// and [`CommandList`](crate::command_list::CommandList).
///
/// Move operations at the edges of the list are not errors; they are ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("history is empty")]
    EmptyHistory,
    #[error("invalid history capacity: {0}")]
    InvalidCapacity(i64),
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
