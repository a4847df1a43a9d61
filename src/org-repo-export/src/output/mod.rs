//! CSV serialization of exported repositories.
//!
//! One row per repository, no header. Columns in order: name, url,
//! description, pushed_at, commit_sha, committer_url.

mod error;

pub use error::OutputError;

use crate::discovery::RepositoryRecord;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A CSV row. Field order is column order.
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    url: &'a str,
    description: &'a str,
    pushed_at: &'a str,
    commit_sha: &'a str,
    committer_url: &'a str,
}

impl<'a> From<&'a RepositoryRecord> for CsvRow<'a> {
    fn from(record: &'a RepositoryRecord) -> Self {
        Self {
            name: record.name(),
            url: record.html_url(),
            description: record.description(),
            pushed_at: record.pushed_at(),
            commit_sha: record.commit_sha(),
            committer_url: record.committer_url(),
        }
    }
}

/// Writes `records` as CSV rows to `writer`.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns [`OutputError`] if a row cannot be written or the writer cannot be
/// flushed.
pub fn write_records<W: Write>(
    writer: W,
    records: &[RepositoryRecord],
) -> Result<usize, OutputError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        csv.serialize(CsvRow::from(record))?;
    }

    csv.flush()?;
    Ok(records.len())
}

/// Writes `records` to the file at `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`OutputError::Create`] if the file cannot be created, or any error
/// from [`write_records`].
pub fn write_csv(path: &Path, records: &[RepositoryRecord]) -> Result<usize, OutputError> {
    info!(path = %path.display(), rows = records.len(), "Dumping data to CSV");

    let file = File::create(path).map_err(|e| OutputError::Create {
        path: path.display().to_string(),
        source: e,
    })?;

    write_records(file, records)
}
