//! Integration tests for snippet-to-request translation.
//!
//! These exercise the full extraction pipeline on realistic captured
//! snippets rather than single patterns in isolation.

use snipfetch_core::snippet::{normalize, parse_snippet};

/// A realistic multi-line capture: session setup, cookies, headers, request.
const FULL_CAPTURE: &str = r#"$session = New-Object Microsoft.PowerShell.Commands.WebRequestSession
$session.UserAgent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
$session.Cookies.Add((New-Object System.Net.Cookie("cf_id", "tok-1", "/", "cdn.example.com")))
$session.Cookies.Add((New-Object System.Net.Cookie("geo", "us", "/", "cdn.example.com")))
Invoke-WebRequest -UseBasicParsing -Uri "https://cdn.example.com/audio/9911.aac" `
-WebSession $session `
-Headers @{
  "Accept"="*/*"
  "Referer"="https://play.example.com/"
}"#;

#[test]
fn test_full_capture_extracts_everything() {
    let parsed = parse_snippet(FULL_CAPTURE);

    assert_eq!(
        parsed.url.as_deref(),
        Some("https://cdn.example.com/audio/9911.aac")
    );
    assert_eq!(
        parsed.config.user_agent.as_deref(),
        Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
    );
    assert_eq!(parsed.config.cookies.len(), 2);
    assert_eq!(
        parsed.config.cookies.get("cf_id").map(String::as_str),
        Some("tok-1")
    );
    assert_eq!(
        parsed.config.cookies.get("geo").map(String::as_str),
        Some("us")
    );
    assert_eq!(parsed.extra_headers.len(), 2);
    assert_eq!(
        parsed.extra_headers.get("Referer").map(String::as_str),
        Some("https://play.example.com/")
    );
}

#[test]
fn test_spec_example_row() {
    let parsed =
        parse_snippet(r#"powershell -Uri "https://x/y.aac" $session.UserAgent="Agent1""#);

    assert_eq!(parsed.url.as_deref(), Some("https://x/y.aac"));
    assert_eq!(parsed.config.user_agent.as_deref(), Some("Agent1"));
    assert!(parsed.config.cookies.is_empty());
    assert!(parsed.extra_headers.is_empty());
}

#[test]
fn test_header_block_spanning_lines_is_found_after_normalization() {
    // The -Headers block spans several original lines; normalization folds
    // them into one line before the block pattern runs.
    let parsed = parse_snippet(FULL_CAPTURE);
    assert_eq!(
        parsed.extra_headers.get("Accept").map(String::as_str),
        Some("*/*")
    );
}

#[test]
fn test_uri_flag_beats_bare_urls_in_same_capture() {
    // FULL_CAPTURE contains a bare URL inside the Referer header value;
    // the -Uri value must still win.
    let parsed = parse_snippet(FULL_CAPTURE);
    assert_eq!(
        parsed.url.as_deref(),
        Some("https://cdn.example.com/audio/9911.aac")
    );
}

#[test]
fn test_snippet_with_nothing_recognizable() {
    let parsed = parse_snippet("echo hello world");
    assert!(parsed.url.is_none());
    assert!(parsed.config.user_agent.is_none());
    assert!(parsed.config.cookies.is_empty());
    assert!(parsed.extra_headers.is_empty());
}

#[test]
fn test_normalize_then_parse_matches_parse_of_raw() {
    // parse_snippet normalizes internally; feeding it pre-normalized text
    // must give the same result.
    let from_raw = parse_snippet(FULL_CAPTURE);
    let from_normalized = parse_snippet(&normalize(FULL_CAPTURE));

    assert_eq!(from_raw.url, from_normalized.url);
    assert_eq!(from_raw.config.user_agent, from_normalized.config.user_agent);
    assert_eq!(from_raw.config.cookies, from_normalized.config.cookies);
    assert_eq!(from_raw.extra_headers, from_normalized.extra_headers);
}
