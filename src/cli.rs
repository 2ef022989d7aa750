//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use snipfetch_core::download::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};

/// Batch-download audio files referenced by command snippets in a CSV column.
///
/// Snipfetch reads captured command snippets from a `snippet` column,
/// reconstructs the HTTP session (headers, cookies) from the first row,
/// extracts a URL from each row, and streams each file to disk, retrying
/// failed downloads until they succeed.
#[derive(Parser, Debug)]
#[command(name = "snipfetch")]
#[command(author, version, about)]
pub struct Args {
    /// CSV file containing the snippet column
    #[arg(default_value = "acclink.csv")]
    pub input: PathBuf,

    /// Base name for output files; a number is incremented per row,
    /// anything else becomes a `{base}_{n}` prefix
    #[arg(short, long, default_value = "track")]
    pub base: String,

    /// Output file extension
    #[arg(short, long, default_value = "aac")]
    pub extension: String,

    /// Directory to write downloaded files to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Seconds to wait between retry attempts (constant, no backoff)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(0..=3600))]
    pub retry_delay: u64,

    /// HTTP connect timeout in seconds
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub connect_timeout: u64,

    /// HTTP read timeout in seconds
    #[arg(long, default_value_t = READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: u64,

    /// Give up on a file after this many attempts (default: retry forever)
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Disable the byte progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
