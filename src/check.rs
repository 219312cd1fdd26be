//! The scan → analyze → classify → report loop.

use std::path::{Path, PathBuf};

use crate::analyzer::Analyzer;
use crate::config::CheckerConfig;
use crate::diagnostics::{classify, Annotator};
use crate::error::Result;
use crate::report::{report_fail, report_pass};
use crate::scan::{display_path, find_paired_header, scan_sources, SourceFile};
use crate::ui::{IwyuTheme, UserInterface};

/// How a check run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every source file was correct.
    Passed { checked: usize },
    /// `file` was incorrect; the run stopped there.
    Failed { file: String, checked: usize },
}

impl CheckOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed { .. } => 0,
            Self::Failed { .. } => 1,
        }
    }

    /// Number of files analyzed, including the failing one.
    pub fn checked(&self) -> usize {
        match self {
            Self::Passed { checked } | Self::Failed { checked, .. } => *checked,
        }
    }
}

/// Runs the analyzer over a project's source directory.
pub struct Checker {
    root: PathBuf,
    config: CheckerConfig,
    theme: IwyuTheme,
    analyzer: Analyzer,
}

impl Checker {
    /// Create a checker for the project at `root`.
    pub fn new(root: &Path, config: CheckerConfig, theme: IwyuTheme) -> Self {
        let analyzer = Analyzer::new(root, &config);
        Self {
            root: root.to_path_buf(),
            config,
            theme,
            analyzer,
        }
    }

    /// The configuration this checker runs with.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check every source file, stopping at the first incorrect one.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<CheckOutcome> {
        let sources = self.sources(ui)?;
        let annotator = Annotator::new(&self.theme);

        for (index, file) in sources.iter().enumerate() {
            let diagnostic = self.diagnostic_for(file, ui);
            let header = find_paired_header(&self.root, &self.config, &file.name)?;
            let verdict = classify(
                &diagnostic,
                &file.display,
                header.as_deref(),
                self.config.policy,
            );

            if verdict.correct {
                report_pass(ui, &verdict);
                continue;
            }

            let mut under_test = vec![file.display.as_str()];
            if let Some(header) = &header {
                under_test.push(header);
            }
            let annotated = annotator.annotate(&diagnostic, &under_test);
            report_fail(ui, &verdict, &annotated);

            return Ok(CheckOutcome::Failed {
                file: file.display.clone(),
                checked: index + 1,
            });
        }

        Ok(CheckOutcome::Passed {
            checked: sources.len(),
        })
    }

    /// Feed each file's diagnostics through the fix tool and print its output.
    ///
    /// No classification happens here. Returns the number of files processed.
    pub fn run_fix(&self, ui: &mut dyn UserInterface) -> Result<usize> {
        let sources = self.sources(ui)?;
        for file in &sources {
            tracing::debug!("Fixing {}", file.display);
            let output = self.analyzer.fix(file)?;
            ui.diagnostic(&output);
        }
        Ok(sources.len())
    }

    fn sources(&self, ui: &mut dyn UserInterface) -> Result<Vec<SourceFile>> {
        let sources = scan_sources(&self.root, &self.config)?;
        if sources.is_empty() {
            ui.message(&format!(
                "No source files found in {}",
                display_path(&self.config.source_dir)
            ));
        } else {
            tracing::debug!("Found {} source files", sources.len());
        }
        Ok(sources)
    }

    /// Analyzer output for `file`; empty if the analyzer could not be run.
    fn diagnostic_for(&self, file: &SourceFile, ui: &mut dyn UserInterface) -> String {
        match self.analyzer.analyze(file) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Analyzer failed on {}: {}", file.display, e);
                ui.warning(&format!("Could not analyze {}: {}", file.display, e));
                String::new()
            }
        }
    }
}
