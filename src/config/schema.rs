//! Configuration schema definitions for iwyu-check.
//!
//! This module contains the struct that maps to the optional
//! `.iwyu-check.yml` file. Every field has a default, so an empty file (or
//! no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = ".iwyu-check.yml";

/// Immutable settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Directory holding the translation units (not searched recursively).
    pub source_dir: PathBuf,

    /// Header directory, passed to the analyzer as `-I` and searched
    /// recursively for paired headers.
    pub include_dir: PathBuf,

    /// Extensions (without the dot) that mark a source file.
    pub source_extensions: Vec<String>,

    /// Extensions (without the dot) considered when looking for a paired header.
    pub header_extensions: Vec<String>,

    /// Analyzer program.
    pub analyzer: String,

    /// Language standard passed as `-std=<std>`.
    pub std: String,

    /// Extra analyzer arguments, placed before the file path.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,

    /// Program that consumes analyzer diagnostics in fix mode.
    pub fix_tool: String,

    /// Arguments passed to the fix tool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fix_args: Vec<String>,

    /// How a source file and its paired header combine into a verdict.
    pub policy: CorrectnessPolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./src"),
            include_dir: PathBuf::from("./include"),
            source_extensions: vec!["cpp".to_string()],
            header_extensions: ["hpp", "h", "hxx", "hh"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            analyzer: "include-what-you-use".to_string(),
            std: "c++20".to_string(),
            extra_args: Vec::new(),
            fix_tool: "fix_includes.py".to_string(),
            fix_args: Vec::new(),
            policy: CorrectnessPolicy::default(),
        }
    }
}

impl CheckerConfig {
    /// Whether `ext` is one of the configured source extensions.
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.source_extensions.iter().any(|e| e == ext)
    }

    /// Whether `ext` is one of the configured header extensions.
    pub fn is_header_extension(&self, ext: &str) -> bool {
        self.header_extensions.iter().any(|e| e == ext)
    }
}

/// Policy for combining the source marker and the paired header marker.
///
/// Only relevant when a paired header exists; otherwise the source marker
/// alone decides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CorrectnessPolicy {
    /// Both the source file and its header must be reported correct.
    #[default]
    Strict,
    /// Either the source file or its header being reported correct is enough.
    Relaxed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = CheckerConfig::default();
        assert_eq!(config.source_dir, PathBuf::from("./src"));
        assert_eq!(config.include_dir, PathBuf::from("./include"));
        assert_eq!(config.analyzer, "include-what-you-use");
        assert_eq!(config.std, "c++20");
        assert_eq!(config.policy, CorrectnessPolicy::Strict);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: CheckerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "source_dir: ./lib\npolicy: relaxed\n";
        let config: CheckerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("./lib"));
        assert_eq!(config.policy, CorrectnessPolicy::Relaxed);
        assert_eq!(config.include_dir, PathBuf::from("./include"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: Result<CheckerConfig, _> = serde_yaml::from_str("policy: lenient");
        assert!(result.is_err());
    }

    #[test]
    fn extension_checks() {
        let config = CheckerConfig::default();
        assert!(config.is_source_extension("cpp"));
        assert!(!config.is_source_extension("cc"));
        assert!(config.is_header_extension("hh"));
        assert!(!config.is_header_extension("cpp"));
    }
}
