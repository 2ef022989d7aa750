//! Constants for the download module (timeouts, chunking, retry pacing).

use std::time::Duration;

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout (60 seconds).
pub const READ_TIMEOUT_SECS: u64 = 60;

/// Default output writer buffer capacity (8 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Constant delay between retry attempts (1 second). There is no backoff
/// growth; the delay stays fixed across attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
