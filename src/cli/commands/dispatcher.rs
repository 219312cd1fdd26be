//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the CLI to a command

use std::path::{Path, PathBuf};

use crate::check::Checker;
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::ui::{IwyuTheme, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the CLI to the check or fix command.
pub struct CommandDispatcher {
    project_root: PathBuf,
    theme: IwyuTheme,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, theme: IwyuTheme) -> Self {
        Self {
            project_root,
            theme,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load configuration, then run the command selected by the flags.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        let config = cli.apply_overrides(config);
        tracing::debug!("Resolved config: {:?}", config);

        let checker = Checker::new(&self.project_root, config, self.theme.clone());
        if cli.fix {
            super::fix::FixCommand::new(checker).execute(ui)
        } else {
            super::check::CheckCommand::new(checker).execute(ui)
        }
    }
}
