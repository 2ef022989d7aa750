//! Download URL extraction from a normalized snippet.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

/// Structured marker: a `-Uri` flag followed by a double-quoted string.
#[allow(clippy::expect_used)]
static URI_FLAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)-Uri\s+"([^"]+)""#).expect("uri flag regex is valid") // Static pattern, safe to panic
});

/// Generic fallback: any http(s) URL up to whitespace or a double quote.
#[allow(clippy::expect_used)]
static BARE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s"]+"#).expect("bare URL regex is valid") // Static pattern, safe to panic
});

/// Extracts the target download URL from a normalized snippet.
///
/// Two strategies are tried in order, and the precedence is deliberate:
///
/// 1. A `-Uri "..."` flag (case-insensitive); the quoted content is returned
///    verbatim with no further decoding.
/// 2. The first bare `http://` or `https://` substring, ending at whitespace
///    or a double quote.
///
/// A snippet containing both a `-Uri` flag and a different bare URL
/// elsewhere yields the `-Uri` value. Returns `None` when neither pattern
/// matches; this is a parse miss, not an error.
#[must_use]
pub fn extract_url(normalized: &str) -> Option<String> {
    if let Some(captures) = URI_FLAG_PATTERN.captures(normalized) {
        let url = captures[1].to_string();
        trace!(url = %url, "URL from -Uri flag");
        return Some(url);
    }

    match BARE_URL_PATTERN.find(normalized) {
        Some(found) => {
            trace!(url = %found.as_str(), "URL from bare-URL fallback");
            Some(found.as_str().to_string())
        }
        None => {
            debug!("no URL found in snippet");
            None
        }
    }
}
