//! Command-line interface for iwyu-check.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{CheckCommand, Command, CommandDispatcher, CommandResult, FixCommand};
