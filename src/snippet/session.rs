//! Session configuration extraction: user agent and cookies.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

/// `$session.UserAgent = "..."` assignment.
#[allow(clippy::expect_used)]
static USER_AGENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\$session\.UserAgent\s*=\s*"([^"]+)""#)
        .expect("user agent regex is valid") // Static pattern, safe to panic
});

/// Cookie-jar add call constructing a four-argument cookie object:
/// name, value, path, domain - each double-quoted, in that fixed order.
#[allow(clippy::expect_used)]
static COOKIE_ADD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\$session\.Cookies\.Add\(\(New-Object System\.Net\.Cookie\("([^"]+)",\s*"([^"]+)",\s*"([^"]+)",\s*"([^"]+)"\)\)\)"#,
    )
    .expect("cookie add regex is valid") // Static pattern, safe to panic
});

/// Session configuration parsed from a snippet: an optional user agent and
/// a name/value cookie mapping.
///
/// Cookie values are sensitive; the Debug impl prints names only.
#[derive(Clone, Default)]
pub struct SessionConfig {
    /// User agent from the `$session.UserAgent` assignment, if present.
    pub user_agent: Option<String>,
    /// Cookies keyed by name; the last match for a repeated name wins.
    /// Path and domain are parsed positionally but not retained.
    pub cookies: HashMap<String, String>,
}

// Custom Debug impl that redacts cookie values.
impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.cookies.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SessionConfig")
            .field("user_agent", &self.user_agent)
            .field("cookie_names", &names)
            .finish()
    }
}

/// Extracts the user agent and cookies from a normalized snippet.
///
/// Both searches are case-insensitive. Absence of the user agent assignment
/// yields `user_agent: None`; zero cookie-add matches yield an empty map.
/// Malformed input never raises - an unmatched pattern is simply absent.
#[must_use]
pub fn extract_config(normalized: &str) -> SessionConfig {
    let user_agent = USER_AGENT_PATTERN
        .captures(normalized)
        .map(|captures| captures[1].to_string());

    let mut cookies = HashMap::new();
    for captures in COOKIE_ADD_PATTERN.captures_iter(normalized) {
        let name = captures[1].to_string();
        let value = captures[2].to_string();
        // captures[3] (path) and captures[4] (domain) are matched but not kept.
        trace!(cookie = %name, "cookie parsed");
        cookies.insert(name, value);
    }

    if user_agent.is_none() {
        debug!("no user agent assignment in snippet");
    }
    debug!(cookies = cookies.len(), "session config extracted");

    SessionConfig {
        user_agent,
        cookies,
    }
}
