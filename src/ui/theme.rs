//! Visual theme and styling.

use console::Style;

/// Colors used for reporting and for annotating analyzer diagnostics.
///
/// The colored theme forces styling on every [`Style`], so the decision of
/// whether to emit escape codes is made exactly once, when the theme is
/// chosen (see [`IwyuTheme::detect`]).
#[derive(Debug, Clone)]
pub struct IwyuTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for `#include` keywords (red).
    pub attention: Style,
    /// Style for quoted and angle-bracketed paths (brown).
    pub path: Style,
    /// Style for forward-declaration keywords (blue).
    pub keyword: Style,
    /// Style for forward-declared identifiers (purple).
    pub identifier: Style,
    /// Style for line comments (dark gray).
    pub comment: Style,
}

impl Default for IwyuTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl IwyuTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().force_styling(true),
            warning: Style::new().yellow().force_styling(true),
            error: Style::new().red().bold().force_styling(true),
            attention: Style::new().red().force_styling(true),
            path: Style::new().yellow().force_styling(true),
            keyword: Style::new().blue().force_styling(true),
            identifier: Style::new().magenta().force_styling(true),
            comment: Style::new().black().bold().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            attention: Style::new(),
            path: Style::new(),
            keyword: Style::new(),
            identifier: Style::new(),
            comment: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (text + check mark in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("{} ✔", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
