//! Per-file pass/fail reporting.

use crate::diagnostics::Verdict;
use crate::ui::UserInterface;

/// Line printed for a file that needs no include changes.
pub fn success_message(verdict: &Verdict) -> String {
    match &verdict.header {
        Some(header) => format!(
            "{} and {} have correct #includes/fwd-decls",
            verdict.source, header
        ),
        None => format!("{} has correct #includes/fwd-decls", verdict.source),
    }
}

/// Line printed after the annotated diagnostic of a failing file.
pub fn failure_message(verdict: &Verdict) -> String {
    let header = verdict
        .header
        .as_ref()
        .map(|h| format!(", and '{}'", h))
        .unwrap_or_default();
    format!(
        "Required #includes/fwd-decls are missing in '{}'{}. \
         Replace your current includes/fwd-decls with the following lines listed above.",
        verdict.source, header
    )
}

/// Report a passing file.
pub fn report_pass(ui: &mut dyn UserInterface, verdict: &Verdict) {
    ui.success(&success_message(verdict));
}

/// Report a failing file: the annotated diagnostic, then the error line.
pub fn report_fail(ui: &mut dyn UserInterface, verdict: &Verdict, annotated: &str) {
    ui.diagnostic(annotated);
    ui.error(&failure_message(verdict));
}
