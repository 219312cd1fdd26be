//! Highlighting analyzer diagnostics for the terminal.
//!
//! [`Annotator::annotate`] applies its steps in a fixed order. Each step
//! works on the whole text, so every match is rewritten exactly once,
//! regardless of which line it is on.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::markers::{CORRECT_SENTENCE, FULL_INCLUDE_LIST, INCLUDE_DIRECTIVE, SHOULD_ADD};
use crate::ui::IwyuTheme;

// --- Compiled regexes (one-time via LazyLock) ---

static CONFIRMATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]*\(([^()\n]+) {}\)[ \t]*(?:\r?\n|$)",
        regex::escape(CORRECT_SENTENCE)
    ))
    .unwrap()
});

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"\n]*""#).unwrap());

static ANGLED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>\n]*>").unwrap());

static NAMESPACE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(namespace)[ \t]+(\w+)( \{)").unwrap());

static TYPE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(class|struct)[ \t]+(\w+)(;)").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

static ADD_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)[\w/.+-]+ {}.*?{}",
        regex::escape(SHOULD_ADD),
        regex::escape(FULL_INCLUDE_LIST)
    ))
    .unwrap()
});

/// Colors a diagnostic and strips the parts that add nothing.
pub struct Annotator<'a> {
    theme: &'a IwyuTheme,
}

impl<'a> Annotator<'a> {
    /// Create an annotator using the given theme.
    pub fn new(theme: &'a IwyuTheme) -> Self {
        Self { theme }
    }

    /// Annotate `diagnostic` for display.
    ///
    /// `under_test` lists the display paths whose "has correct" lines are
    /// kept; confirmation lines for any other file are dropped.
    pub fn annotate(&self, diagnostic: &str, under_test: &[&str]) -> String {
        let text = drop_foreign_confirmations(diagnostic, under_test);
        let text = self.highlight_directives(&text);
        let text = self.highlight_paths(&text);
        let text = self.highlight_forward_declarations(&text);
        let text = self.highlight_comments(&text);
        drop_add_suggestions(&text)
    }

    fn highlight_directives(&self, text: &str) -> String {
        let styled = self.theme.attention.apply_to(INCLUDE_DIRECTIVE).to_string();
        text.replace(INCLUDE_DIRECTIVE, &styled)
    }

    fn highlight_paths(&self, text: &str) -> String {
        let wrap = |caps: &Captures| self.theme.path.apply_to(&caps[0]).to_string();
        let text = QUOTED.replace_all(text, wrap);
        ANGLED.replace_all(&text, wrap).into_owned()
    }

    fn highlight_forward_declarations(&self, text: &str) -> String {
        let recolor = |caps: &Captures| {
            format!(
                "{} {}{}",
                self.theme.keyword.apply_to(&caps[1]),
                self.theme.identifier.apply_to(&caps[2]),
                &caps[3]
            )
        };
        let text = NAMESPACE_DECL.replace_all(text, recolor);
        TYPE_DECL.replace_all(&text, recolor).into_owned()
    }

    fn highlight_comments(&self, text: &str) -> String {
        LINE_COMMENT
            .replace_all(text, |caps: &Captures| {
                self.theme.comment.apply_to(&caps[0]).to_string()
            })
            .into_owned()
    }
}

/// Remove "(<path> has correct #includes/fwd-decls)" lines for files other
/// than those in `keep`.
fn drop_foreign_confirmations(text: &str, keep: &[&str]) -> String {
    CONFIRMATION_LINE
        .replace_all(text, |caps: &Captures| {
            if keep.iter().any(|path| *path == &caps[1]) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Remove each "<path> should add these lines:" block, up to but not
/// including "The full include-list", which repeats the same lines.
fn drop_add_suggestions(text: &str) -> String {
    ADD_BLOCK.replace_all(text, FULL_INCLUDE_LIST).into_owned()
}
