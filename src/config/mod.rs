//! Configuration loading for iwyu-check.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use iwyu_check::config::{load_config, CorrectnessPolicy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".iwyu-check.yml"), "policy: relaxed").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.policy, CorrectnessPolicy::Relaxed);
//! assert_eq!(config.analyzer, "include-what-you-use");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, parse_config};
pub use schema::{CheckerConfig, CorrectnessPolicy, CONFIG_FILE_NAME};
