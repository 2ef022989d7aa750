//! Whitespace normalization for raw snippet text.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every maximal run of whitespace (spaces, tabs, CR, LF).
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace regex is valid") // Static pattern, safe to panic
});

/// Collapses a raw multi-line snippet into a single whitespace-normalized line.
///
/// Every carriage-return and line-feed becomes a space, every run of
/// whitespace collapses to exactly one space, and leading/trailing
/// whitespace is trimmed. Total function with no failure modes, and
/// idempotent: `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}
