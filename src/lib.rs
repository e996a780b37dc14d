#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod bounded_history;
pub mod command_list;
pub mod error;
pub mod list_command;
pub mod shared_list;
pub mod traits;

pub use error::{Error, Result};

pub mod prelude {
	pub use crate::bounded_history::BoundedHistory;
	pub use crate::command_list::CommandList;
	pub use crate::error::Error;
	pub use crate::list_command::ListCommand;
	pub use crate::shared_list::SharedCommandList;
	pub use crate::traits::reversible_command::ReversibleCommand;
}
