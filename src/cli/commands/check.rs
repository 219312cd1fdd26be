//! Check command implementation.
//!
//! The default mode: analyze each source file, stop at the first one with
//! missing includes.

use crate::check::{CheckOutcome, Checker};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    checker: Checker,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(checker: Checker) -> Self {
        Self { checker }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.checker.run(ui)?;
        tracing::debug!("Check finished after {} file(s)", outcome.checked());

        match outcome {
            CheckOutcome::Passed { .. } => Ok(CommandResult::success()),
            CheckOutcome::Failed { .. } => Ok(CommandResult::failure(outcome.exit_code())),
        }
    }
}
