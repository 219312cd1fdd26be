//! Configuration file discovery and loading.

use crate::config::schema::{CheckerConfig, CONFIG_FILE_NAME};
use crate::error::{IwyuError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the project config file, if it exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`CheckerConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IwyuError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IwyuError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`CheckerConfig`].
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckerConfig> {
    if content.trim().is_empty() {
        return Ok(CheckerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| IwyuError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the project config
/// is used when present, and defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CheckerConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(CheckerConfig::default())
        }
    }
}
