//! iwyu-check - include-what-you-use over a C++ source tree.
//!
//! Runs `include-what-you-use` on every translation unit in a source
//! directory, colors its diagnostics so missing includes stand out, and
//! stops at the first file that needs changes.
//!
//! # Modules
//!
//! - [`analyzer`] - Invoking the analyzer and the fix tool
//! - [`check`] - The per-file check loop
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`diagnostics`] - Classifying and annotating analyzer output
//! - [`error`] - Error types and result aliases
//! - [`process`] - External process execution
//! - [`report`] - Pass/fail messages
//! - [`scan`] - Source directory and paired-header lookup
//! - [`ui`] - Terminal output and colors
//!
//! # Example
//!
//! ```
//! use iwyu_check::diagnostics::Annotator;
//! use iwyu_check::ui::IwyuTheme;
//!
//! let theme = IwyuTheme::plain();
//! let output = "src/a.cpp should add these lines:\n#include <vector>\n\n\
//!               The full include-list for src/a.cpp:\n#include <vector>\n";
//! let annotated = Annotator::new(&theme).annotate(output, &["src/a.cpp"]);
//! assert_eq!(annotated, "The full include-list for src/a.cpp:\n#include <vector>\n");
//! ```

pub mod analyzer;
pub mod check;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod process;
pub mod report;
pub mod scan;
pub mod ui;

pub use error::{IwyuError, Result};
