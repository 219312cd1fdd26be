//! Fixed phrases from include-what-you-use's output.
//!
//! Tested against include-what-you-use 0.19 (clang 15). Any change in the
//! analyzer's wording has to be mirrored here.

/// Sentence IWYU prints for a file whose includes need no change.
pub const CORRECT_SENTENCE: &str = "has correct #includes/fwd-decls";

/// Opens the block of lines IWYU wants added to a file.
pub const SHOULD_ADD: &str = "should add these lines:";

/// Opens the final, complete include listing for a file.
pub const FULL_INCLUDE_LIST: &str = "The full include-list";

/// The include directive keyword.
pub const INCLUDE_DIRECTIVE: &str = "#include";

/// The marker IWYU prints when `path` is already correct.
pub fn correct_marker(path: &str) -> String {
    format!("({} {})", path, CORRECT_SENTENCE)
}

/// Whether `diagnostic` declares `path` correct.
pub fn is_marked_correct(diagnostic: &str, path: &str) -> bool {
    diagnostic.contains(&correct_marker(path))
}
