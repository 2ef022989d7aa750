//! HTTP download engine for streaming files to disk.
//!
//! This module provides the retrying, chunked, progress-tracked download
//! routine. Downloads stream to disk (memory-efficient for large files),
//! report byte progress, and retry indefinitely on any failure with a
//! constant delay between attempts.
//!
//! # Example
//!
//! ```no_run
//! use snipfetch_core::download::Downloader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new(reqwest::Client::new());
//! let bytes = downloader
//!     .download("https://example.com/track.aac", Path::new("1.aac"))
//!     .await?;
//! println!("wrote {bytes} bytes");
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;

pub use client::{DownloadOptions, Downloader};
pub use constants::{
    CONNECT_TIMEOUT_SECS, DEFAULT_CHUNK_SIZE, DEFAULT_RETRY_DELAY, READ_TIMEOUT_SECS,
};
pub use error::DownloadError;
