//! Snipfetch Core Library
//!
//! This library provides the core functionality for the snipfetch tool,
//! which batch-downloads audio files referenced by download links embedded
//! in shell-command snippets stored in a spreadsheet column.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`snippet`] - Snippet-to-request translation (URL, user agent, cookies, headers)
//! - [`session`] - Shared HTTP session assembly from the first snippet
//! - [`download`] - Resilient streaming downloader with indefinite retry
//! - [`input`] - CSV reader for the snippet column
//! - [`naming`] - Output filename generation

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod input;
pub mod naming;
pub mod session;
pub mod snippet;

// Re-export commonly used types
pub use download::{DownloadError, DownloadOptions, Downloader};
pub use input::{InputError, read_snippets};
pub use naming::NamingScheme;
pub use session::{DEFAULT_USER_AGENT, SessionError, SessionProfile};
pub use snippet::{
    ParsedSnippet, SessionConfig, extract_config, extract_headers, extract_url, normalize,
    parse_snippet,
};
