//! Invoking include-what-you-use.

use std::path::{Path, PathBuf};

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::process::{self, CommandOptions, Stage};
use crate::scan::SourceFile;

/// The analyzer and fix tool as configured for one run.
#[derive(Debug, Clone)]
pub struct Analyzer {
    root: PathBuf,
    program: String,
    base_args: Vec<String>,
    fix_tool: String,
    fix_args: Vec<String>,
}

impl Analyzer {
    /// Prepare invocations for the project at `root`.
    pub fn new(root: &Path, config: &CheckerConfig) -> Self {
        let mut base_args = vec![
            format!("-std={}", config.std),
            format!("-I{}", config.include_dir.display()),
        ];
        base_args.extend(config.extra_args.iter().cloned());

        Self {
            root: root.to_path_buf(),
            program: config.analyzer.clone(),
            base_args,
            fix_tool: config.fix_tool.clone(),
            fix_args: config.fix_args.clone(),
        }
    }

    /// Full argument list for analyzing `file`.
    pub fn args_for(&self, file: &SourceFile) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.push(file.path.to_string_lossy().into_owned());
        args
    }

    /// Run the analyzer on `file` and return its diagnostic stream.
    ///
    /// The analyzer's exit status carries no meaning here (IWYU exits
    /// non-zero for perfectly good files). Only a failure to start the
    /// analyzer is an error.
    pub fn analyze(&self, file: &SourceFile) -> Result<String> {
        let options = CommandOptions {
            cwd: Some(self.root.clone()),
            capture_stdout: false,
            capture_stderr: true,
        };

        let result = process::execute(&self.program, &self.args_for(file), &options)?;
        tracing::debug!(
            "{} finished for {} with {:?} in {:?}",
            self.program,
            file.display,
            result.exit_code,
            result.duration
        );
        Ok(result.stderr)
    }

    /// Pipe the analyzer's diagnostics for `file` through the fix tool and
    /// return what the fix tool printed.
    pub fn fix(&self, file: &SourceFile) -> Result<String> {
        let args = self.args_for(file);
        let result = process::execute_stderr_pipe(
            Stage {
                program: &self.program,
                args: &args,
            },
            Stage {
                program: &self.fix_tool,
                args: &self.fix_args,
            },
            &self.root,
        )?;

        if !result.success {
            tracing::debug!(
                "{} exited with {:?} for {}",
                self.fix_tool,
                result.exit_code,
                file.display
            );
        }
        Ok(result.stdout)
    }
}
