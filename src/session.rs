//! Shared HTTP session assembly.
//!
//! The first input row's parsed configuration seeds one [`SessionProfile`]:
//! a base set of request headers (user agent, extra headers, and a `Cookie`
//! header replaying the parsed cookies). The profile builds a single
//! `reqwest::Client` that is reused read-only for every download.
//!
//! Parsed cookies carry no retained domain or path scope, so they are
//! replayed as a default `Cookie` header sent with every request, matching
//! the behavior of the session the snippets were captured from.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use crate::snippet::SessionConfig;

/// Browser-like User-Agent used when the first snippet carries none.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36 Edg/133.0.0.0";

/// Errors that can occur while assembling the shared session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An extracted header key is not a valid HTTP header name.
    #[error("invalid header name: {name}")]
    InvalidHeaderName {
        /// The offending header key.
        name: String,
    },

    /// An extracted header value is not a valid HTTP header value.
    #[error("invalid value for header {name}")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
    },

    /// The underlying HTTP client failed to build.
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        /// The builder error.
        #[source]
        source: reqwest::Error,
    },
}

/// The request profile shared by all downloads: base headers and cookies,
/// created once from the first row and read-only from that point.
#[derive(Debug, Clone)]
pub struct SessionProfile {
    headers: HeaderMap,
}

impl SessionProfile {
    /// Assembles the profile from the first row's session config and extra
    /// header block.
    ///
    /// The user agent falls back to [`DEFAULT_USER_AGENT`] when absent.
    /// Cookies are joined into a single `Cookie` header as
    /// `name=value; name=value` (sorted by name for determinism).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when an extracted header key or value is not
    /// valid HTTP header material.
    pub fn assemble(
        config: &SessionConfig,
        extra_headers: &HashMap<String, String>,
    ) -> Result<Self, SessionError> {
        let mut headers = HeaderMap::new();

        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|_| SessionError::InvalidHeaderValue {
                name: "User-Agent".to_string(),
            })?,
        );

        for (name, value) in extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                SessionError::InvalidHeaderName { name: name.clone() }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                SessionError::InvalidHeaderValue { name: name.clone() }
            })?;
            headers.insert(header_name, header_value);
        }

        if !config.cookies.is_empty() {
            let mut pairs: Vec<(&str, &str)> = config
                .cookies
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            pairs.sort_unstable_by_key(|(name, _)| *name);
            let joined = pairs
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            headers.insert(
                COOKIE,
                HeaderValue::from_str(&joined).map_err(|_| SessionError::InvalidHeaderValue {
                    name: "Cookie".to_string(),
                })?,
            );
        }

        info!(
            user_agent = %user_agent,
            cookies = config.cookies.len(),
            extra_headers = extra_headers.len(),
            "session profile assembled"
        );

        Ok(Self { headers })
    }

    /// The assembled base header set.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Builds the shared HTTP client carrying the profile's headers as
    /// default headers, with the given connect/read timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ClientBuild`] if the client builder fails.
    pub fn build_client(
        &self,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Client, SessionError> {
        debug!(
            connect_timeout_secs = connect_timeout.as_secs(),
            read_timeout_secs = read_timeout.as_secs(),
            "building HTTP client"
        );
        Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .gzip(true)
            .default_headers(self.headers.clone())
            .build()
            .map_err(|source| SessionError::ClientBuild { source })
    }
}
