//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{CheckerConfig, CorrectnessPolicy};

/// iwyu-check - Run include-what-you-use over a C++ source tree.
#[derive(Debug, Default, Parser)]
#[command(name = "iwyu-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pipe diagnostics through the fix tool instead of checking
    #[arg(long)]
    pub fix: bool,

    /// How a source file and its paired header combine into a verdict
    #[arg(long, value_enum)]
    pub policy: Option<CorrectnessPolicy>,

    /// Source directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Header directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub include_dir: Option<PathBuf>,

    /// Path to config file (overrides default .iwyu-check.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Only report failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, mut config: CheckerConfig) -> CheckerConfig {
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(dir) = &self.include_dir {
            config.include_dir = dir.clone();
        }
        config
    }
}
