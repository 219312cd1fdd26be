//! Fix command implementation.
//!
//! Hands every file's diagnostics to the fix tool and prints what it says.
//! Nothing is classified, so this always succeeds unless a tool can't be run.

use crate::check::Checker;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The fix command implementation.
pub struct FixCommand {
    checker: Checker,
}

impl FixCommand {
    /// Create a new fix command.
    pub fn new(checker: Checker) -> Self {
        Self { checker }
    }
}

impl Command for FixCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let processed = self.checker.run_fix(ui)?;
        tracing::debug!(
            "Passed {} file(s) through {}",
            processed,
            self.checker.config().fix_tool
        );
        Ok(CommandResult::success())
    }
}
