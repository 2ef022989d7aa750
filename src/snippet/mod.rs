//! Snippet parsing module: turns a captured command-line snippet into a
//! structured HTTP request configuration.
//!
//! A snippet is a loosely structured shell command believed to encode a
//! download request's URL, headers, and cookies. Extraction is pattern-based
//! with ordered fallbacks, and a pattern that does not match yields an
//! absent/empty value - never an error.
//!
//! # Example
//!
//! ```
//! use snipfetch_core::snippet::parse_snippet;
//!
//! let parsed = parse_snippet(r#"powershell -Uri "https://x/y.aac" $session.UserAgent = "Agent1""#);
//! assert_eq!(parsed.url.as_deref(), Some("https://x/y.aac"));
//! assert_eq!(parsed.config.user_agent.as_deref(), Some("Agent1"));
//! ```

mod headers;
mod normalize;
mod session;
mod url;

pub use headers::extract_headers;
pub use normalize::normalize;
pub use session::{SessionConfig, extract_config};
pub use url::extract_url;

use std::collections::HashMap;

use tracing::debug;

/// Everything extracted from one snippet: the download URL, the session
/// configuration, and the additional header block.
#[derive(Debug, Clone, Default)]
pub struct ParsedSnippet {
    /// The normalized single-line snippet text.
    pub normalized: String,
    /// The extracted download URL, if any pattern matched.
    pub url: Option<String>,
    /// User agent and cookies parsed from structured assignments.
    pub config: SessionConfig,
    /// Key/value pairs from the `-Headers @{ ... }` block.
    pub extra_headers: HashMap<String, String>,
}

/// Parses a raw snippet: normalizes it, then runs all extractors.
///
/// This is the main entry point for the snippet module. It never fails;
/// a snippet with nothing recognizable in it yields a `ParsedSnippet` with
/// `url: None` and empty config/headers.
#[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
#[must_use]
pub fn parse_snippet(raw: &str) -> ParsedSnippet {
    let normalized = normalize(raw);
    let url = extract_url(&normalized);
    let config = extract_config(&normalized);
    let extra_headers = extract_headers(&normalized);

    debug!(
        url_found = url.is_some(),
        user_agent_found = config.user_agent.is_some(),
        cookies = config.cookies.len(),
        extra_headers = extra_headers.len(),
        "snippet parsed"
    );

    ParsedSnippet {
        normalized,
        url,
        config,
        extra_headers,
    }
}
