//! Resilient streaming downloader.
//!
//! One [`Downloader`] wraps the shared HTTP client and performs streaming
//! GETs with byte-progress reporting. A failed attempt - network error,
//! timeout, error status, disk error - is never surfaced: the partial file
//! is abandoned (truncated by the next attempt), the loop sleeps a constant
//! delay, and the request is reissued. By default this continues until the
//! download succeeds.

use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use reqwest::header::CONTENT_LENGTH;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};

use super::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_RETRY_DELAY};
use super::error::DownloadError;

/// Tuning knobs for the download loop.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Output writer buffer capacity. The transport stream dictates read
    /// granularity; this sizes the buffered writer in front of the file.
    pub chunk_size: usize,
    /// Constant delay between attempts. No backoff growth.
    pub retry_delay: Duration,
    /// Optional safety valve: stop after this many attempts and surface the
    /// last error. `None` (the default) retries forever.
    pub max_attempts: Option<u32>,
    /// Draw a progress bar on stderr. Disabled for quiet runs and tests.
    pub show_progress: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
            show_progress: true,
        }
    }
}

/// Streaming downloader with retry-until-success semantics.
///
/// The client is built once from the first row's session profile and shared
/// read-only across all downloads; the downloader never mutates it.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    options: DownloadOptions,
}

impl Downloader {
    /// Creates a downloader with default options.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_options(client, DownloadOptions::default())
    }

    /// Creates a downloader with explicit options.
    #[must_use]
    pub fn with_options(client: Client, options: DownloadOptions) -> Self {
        Self { client, options }
    }

    /// Downloads `url` to `destination`, retrying on every failure.
    ///
    /// Each attempt issues a streaming GET with the session's headers and
    /// cookies, truncates the destination, and streams the body to disk in
    /// chunks while advancing a byte progress bar. Any error abandons the
    /// attempt and, after the constant retry delay, restarts it from
    /// scratch; there is no resume. Runs until success unless
    /// `max_attempts` is configured.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Only when `max_attempts` is set and exhausted: the last attempt's
    /// [`DownloadError`]. With the default options this function has no
    /// failure path and blocks until the download completes.
    #[instrument(skip(self), fields(url = %url, path = %destination.display()))]
    pub async fn download(&self, url: &str, destination: &Path) -> Result<u64, DownloadError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(attempt, "attempting download");

            match self.attempt(url, destination).await {
                Ok(bytes) => {
                    info!(bytes, attempt, "download complete");
                    return Ok(bytes);
                }
                Err(error) => {
                    warn!(
                        %error,
                        attempt,
                        retry_delay = ?self.options.retry_delay,
                        "download attempt failed"
                    );
                    if let Some(max) = self.options.max_attempts
                        && attempt >= max
                    {
                        warn!(max_attempts = max, "attempt limit reached, giving up");
                        return Err(error);
                    }
                    tokio::time::sleep(self.options.retry_delay).await;
                }
            }
        }
    }

    /// One download attempt: GET, truncate, stream, flush.
    async fn attempt(&self, url: &str, destination: &Path) -> Result<u64, DownloadError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url)
            } else {
                DownloadError::network(url, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        // 0 when the length header is absent; the bar then shows an
        // indeterminate total.
        let total = declared_total(response.headers());
        let progress = self.progress_bar(total, destination);

        let file = File::create(destination)
            .await
            .map_err(|e| DownloadError::io(destination, e))?;
        let mut writer = BufWriter::with_capacity(self.options.chunk_size, file);

        let result =
            stream_to_writer(&mut writer, response.bytes_stream(), url, destination, &progress)
                .await;
        match result {
            Ok(bytes) => {
                progress.finish();
                Ok(bytes)
            }
            Err(error) => {
                // Partial content stays on disk; the next attempt truncates it.
                progress.abandon();
                Err(error)
            }
        }
    }

    fn progress_bar(&self, total: u64, destination: &Path) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{msg} {bytes}/{total_bytes} ({bytes_per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(format!("Downloading {}", destination.display()));
        bar
    }
}

/// Streams the response body to the writer, returning bytes written.
///
/// Flushes on success; on error the writer is dropped by the caller, which
/// closes the file handle either way.
async fn stream_to_writer<S>(
    writer: &mut BufWriter<File>,
    stream: S,
    url: &str,
    destination: &Path,
    progress: &ProgressBar,
) -> Result<u64, DownloadError>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;
        if chunk.is_empty() {
            continue;
        }

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(destination, e))?;

        bytes_written += chunk.len() as u64;
        progress.inc(chunk.len() as u64);
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(destination, e))?;

    Ok(bytes_written)
}

/// Declared body size from the length header, or 0 when absent/unparseable.
fn declared_total(headers: &reqwest::header::HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}
