//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report every file.
    #[default]
    Normal,
    /// Only report failures and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages (successes, info).
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
