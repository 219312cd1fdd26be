//! Deciding whether a translation unit already has correct includes.

use super::markers::is_marked_correct;
use crate::config::CorrectnessPolicy;

/// Classification of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the includes need no change.
    pub correct: bool,
    /// Display path of the source file.
    pub source: String,
    /// Display path of the paired header, if one exists.
    pub header: Option<String>,
}

/// Classify a source file (and its paired header) from analyzer output.
///
/// Without a paired header only the source marker counts. With one, the
/// `policy` decides whether both markers or either marker must be present.
pub fn classify(
    diagnostic: &str,
    source: &str,
    header: Option<&str>,
    policy: CorrectnessPolicy,
) -> Verdict {
    let source_ok = is_marked_correct(diagnostic, source);

    let correct = match header {
        None => source_ok,
        Some(header) => {
            let header_ok = is_marked_correct(diagnostic, header);
            tracing::debug!(
                "{}: source marker {}, header marker {} ({:?})",
                source,
                source_ok,
                header_ok,
                policy
            );
            match policy {
                CorrectnessPolicy::Strict => source_ok && header_ok,
                CorrectnessPolicy::Relaxed => source_ok || header_ok,
            }
        }
    };

    Verdict {
        correct,
        source: source.to_string(),
        header: header.map(str::to_string),
    }
}
