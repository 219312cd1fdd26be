//! External process execution.

pub mod command;
pub mod pipe;

pub use command::{describe, execute, CommandOptions, CommandResult};
pub use pipe::{execute_stderr_pipe, Stage};
