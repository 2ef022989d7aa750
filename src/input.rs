//! CSV input: reads the snippet column from the tabular input file.
//!
//! This is the fatal boundary of the run: an unreadable file or a missing
//! `snippet` column aborts before any download starts. Everything after
//! this point degrades gracefully instead of failing.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// The column that must be present in the input file.
const SNIPPET_COLUMN: &str = "snippet";

/// Errors that can occur while reading the snippet input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The input file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error("failed to parse {} as CSV: {source}", .path.display())]
    Csv {
        /// The input file path.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The CSV lacks the required snippet column.
    #[error("{} has no '{SNIPPET_COLUMN}' column", .path.display())]
    MissingColumn {
        /// The input file path.
        path: PathBuf,
    },
}

/// One row of the input file. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct SnippetRow {
    snippet: String,
}

/// Reads all snippets from the CSV at `path`, in row order.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read, is not valid CSV,
/// or lacks a `snippet` column.
pub fn read_snippets(path: &Path) -> Result<Vec<String>, InputError> {
    let file = std::fs::File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(file));

    let headers = reader.headers().map_err(|source| InputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if !headers.iter().any(|h| h == SNIPPET_COLUMN) {
        return Err(InputError::MissingColumn {
            path: path.to_path_buf(),
        });
    }

    let mut snippets = Vec::new();
    for result in reader.deserialize::<SnippetRow>() {
        let row = result.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(row = snippets.len() + 1, len = row.snippet.len(), "read snippet row");
        snippets.push(row.snippet);
    }

    info!(rows = snippets.len(), path = %path.display(), "input file read");
    Ok(snippets)
}
