//! Additional header block extraction (`-Headers @{ ... }`).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// `-Headers @{ ... }` block with a non-greedy inner capture. The `s` flag
/// lets the block span what were originally multiple lines, matching the
/// pre-normalization shape of captured snippets.
#[allow(clippy::expect_used)]
static HEADER_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)-Headers\s+@\{\s*(.*?)\s*\}")
        .expect("header block regex is valid") // Static pattern, safe to panic
});

/// `"key"="value"` pairs within the block.
#[allow(clippy::expect_used)]
static HEADER_PAIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"\s*=\s*"([^"]+)""#).expect("header pair regex is valid") // Static pattern, safe to panic
});

/// Extracts the additional key/value header block from a normalized snippet.
///
/// Returns an empty map when no `-Headers @{ ... }` block exists. Within
/// the block, every non-overlapping `"key"="value"` occurrence is inserted;
/// a repeated key keeps the last value.
#[must_use]
pub fn extract_headers(normalized: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    let Some(captures) = HEADER_BLOCK_PATTERN.captures(normalized) else {
        debug!("no -Headers block in snippet");
        return headers;
    };

    let block = &captures[1];
    for pair in HEADER_PAIR_PATTERN.captures_iter(block) {
        headers.insert(pair[1].to_string(), pair[2].to_string());
    }

    debug!(headers = headers.len(), "header block extracted");
    headers
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headers_two_pairs() {
        let headers = extract_headers(r#"-Headers @{ "X"="1" "Y"="2" }"#);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X").map(String::as_str), Some("1"));
        assert_eq!(headers.get("Y").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_extract_headers_no_block_yields_empty_map() {
        assert!(extract_headers("nothing to see").is_empty());
        assert!(extract_headers("").is_empty());
    }

    #[test]
    fn test_extract_headers_case_insensitive_flag() {
        let headers = extract_headers(r#"-HEADERS @{ "Accept"="*/*" }"#);
        assert_eq!(headers.get("Accept").map(String::as_str), Some("*/*"));
    }

    #[test]
    fn test_extract_headers_non_greedy_stops_at_first_close_brace() {
        // A second brace-delimited region later in the snippet must not be
        // swallowed into the header block.
        let snippet = r#"-Headers @{ "X"="1" } -Body @{ "Y"="2" }"#;
        let headers = extract_headers(snippet);
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("X"));
        assert!(!headers.contains_key("Y"));
    }

    #[test]
    fn test_extract_headers_repeated_key_last_wins() {
        let headers = extract_headers(r#"-Headers @{ "X"="old" "X"="new" }"#);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X").map(String::as_str), Some("new"));
    }

    #[test]
    fn test_extract_headers_tolerates_spacing_around_equals() {
        let headers = extract_headers(r#"-Headers @{ "Referer" = "https://example.com/" }"#);
        assert_eq!(
            headers.get("Referer").map(String::as_str),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_extract_headers_realistic_browser_block() {
        let snippet = concat!(
            r#"Invoke-WebRequest -Uri "https://example.com/x.aac" -Headers @{ "#,
            r#""Accept"="*/*" "Accept-Language"="en-US,en;q=0.9" "#,
            r#""Referer"="https://example.com/player" "Range"="bytes=0-" }"#
        );
        let headers = extract_headers(snippet);
        assert_eq!(headers.len(), 4);
        assert_eq!(
            headers.get("Accept-Language").map(String::as_str),
            Some("en-US,en;q=0.9")
        );
        assert_eq!(headers.get("Range").map(String::as_str), Some("bytes=0-"));
    }
}
