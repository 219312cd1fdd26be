//! Everything that depends on the wording of include-what-you-use output.
//!
//! - [`markers`] holds the fixed phrases the analyzer prints
//! - [`classify`] turns a diagnostic into a pass/fail [`Verdict`]
//! - [`annotate`] colors a failing diagnostic for display
//!
//! The rest of the crate only sees these functions, so a change in the
//! analyzer's phrasing stays inside this module.
//!
//! # Example
//!
//! ```
//! use iwyu_check::config::CorrectnessPolicy;
//! use iwyu_check::diagnostics::classify;
//!
//! let output = "(src/a.cpp has correct #includes/fwd-decls)\n";
//! let verdict = classify(output, "src/a.cpp", None, CorrectnessPolicy::Strict);
//! assert!(verdict.correct);
//! ```

pub mod annotate;
pub mod classify;
pub mod markers;

pub use annotate::Annotator;
pub use classify::{classify, Verdict};
pub use markers::{correct_marker, is_marked_correct};
