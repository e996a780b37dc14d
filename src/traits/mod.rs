pub mod reversible_command;
