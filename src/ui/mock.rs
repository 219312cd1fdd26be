//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use iwyu_check::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking 3 files");
//! ui.error("Required #includes/fwd-decls are missing in 'src/a.cpp'.");
//!
//! assert!(ui.messages().contains(&"Checking 3 files".to_string()));
//! assert!(ui.has_error("src/a.cpp"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    diagnostics: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured diagnostic blocks.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Check if any success message contains the given text.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any error message contains the given text.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if any diagnostic block contains the given text.
    pub fn has_diagnostic(&self, text: &str) -> bool {
        self.diagnostics.iter().any(|d| d.contains(text))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.diagnostics.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn diagnostic(&mut self, text: &str) {
        self.diagnostics.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.diagnostic("raw text\n");

        assert_eq!(ui.messages(), ["hello".to_string()]);
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert!(ui.has_diagnostic("raw text"));
    }

    #[test]
    fn quiet_mode_drops_status_but_keeps_failures() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("hidden");
        ui.error("shown");
        ui.diagnostic("shown");

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert_eq!(ui.errors().len(), 1);
        assert_eq!(ui.diagnostics().len(), 1);
    }

    #[test]
    fn clear_resets() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.error("b");
        ui.clear();
        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }
}
