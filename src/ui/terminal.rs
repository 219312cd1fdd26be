//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{IwyuTheme, OutputMode, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: IwyuTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(theme: IwyuTheme, mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn diagnostic(&mut self, text: &str) {
        // Analyzer output already ends with its own newline.
        write!(self.term, "{}", text).ok();
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.term).ok();
        }
        self.term.flush().ok();
    }
}
