//! CLI entry point for the snipfetch tool.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use snipfetch_core::{
    DownloadOptions, Downloader, NamingScheme, ParsedSnippet, SessionProfile, parse_snippet,
    read_snippets,
};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Snipfetch starting");

    // Fatal boundary: unreadable input or missing snippet column aborts here.
    let snippets = read_snippets(&args.input)?;
    if snippets.is_empty() {
        info!(path = %args.input.display(), "Input file has no rows");
        return Ok(());
    }

    // Translate every row's snippet into (url, config, extra headers).
    let parsed: Vec<ParsedSnippet> = snippets.iter().map(|s| parse_snippet(s)).collect();

    for (idx, row) in parsed.iter().enumerate() {
        let row_number = idx + 1;
        debug!(row = row_number, snippet = %row.normalized, "normalized snippet");
        match &row.url {
            Some(url) => info!(row = row_number, url = %url, "URL extracted"),
            None => info!(row = row_number, "no URL found in snippet"),
        }
        info!(
            row = row_number,
            user_agent = row.config.user_agent.as_deref().unwrap_or("(none)"),
            cookies = row.config.cookies.len(),
            extra_headers = row.extra_headers.len(),
            "row configuration"
        );
    }

    if parsed.iter().all(|row| row.url.is_none()) {
        info!("No valid URLs were extracted. Exiting.");
        return Ok(());
    }

    // The first row's config and header block seed the shared session.
    let first = &parsed[0];
    let profile = SessionProfile::assemble(&first.config, &first.extra_headers)?;
    for name in profile.headers().keys() {
        debug!(header = %name, "session header");
    }

    let client = profile.build_client(
        Duration::from_secs(args.connect_timeout),
        Duration::from_secs(args.read_timeout),
    )?;

    let options = DownloadOptions {
        retry_delay: Duration::from_secs(args.retry_delay),
        max_attempts: args.max_attempts,
        show_progress: !args.quiet && !args.no_progress,
        ..DownloadOptions::default()
    };
    let downloader = Downloader::with_options(client, options);
    let scheme = NamingScheme::from_base(&args.base);

    // Strictly sequential: each download runs to completion before the next.
    let mut downloaded = 0usize;
    let mut skipped = 0usize;
    for (idx, row) in parsed.iter().enumerate() {
        let row_number = idx + 1;
        let Some(url) = &row.url else {
            info!(row = row_number, "No URL extracted. Skipping.");
            skipped += 1;
            continue;
        };

        let destination = scheme.path(&args.output_dir, idx, &args.extension);
        if destination.exists() {
            info!(
                row = row_number,
                path = %destination.display(),
                "File already exists. Skipping download."
            );
            skipped += 1;
            continue;
        }

        info!(row = row_number, url = %url, path = %destination.display(), "Downloading");
        match downloader.download(url, &destination).await {
            Ok(bytes) => {
                info!(row = row_number, bytes, path = %destination.display(), "Download saved");
                downloaded += 1;
            }
            // Only reachable with --max-attempts; the default retries forever.
            Err(error) => {
                warn!(row = row_number, %error, "Giving up on row");
                skipped += 1;
            }
        }
    }

    info!(downloaded, skipped, total = parsed.len(), "Run complete");
    Ok(())
}
