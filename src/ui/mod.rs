//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output for tests
//! - [`IwyuTheme`] with the colors used for reports and annotations
//!
//! # Example
//!
//! ```
//! use iwyu_check::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("src/a.cpp has correct #includes/fwd-decls");
//! assert!(ui.has_success("src/a.cpp"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, IwyuTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display an informational message. Hidden in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a success message. Hidden in quiet mode.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display analyzer or fix-tool output verbatim. Always shown.
    fn diagnostic(&mut self, text: &str);
}
