//! CSV output error types.

use thiserror::Error;

/// Errors that can occur while writing the CSV file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be created.
    #[error("Error opening {path} for writing: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be serialized or written.
    #[error("Error writing record to CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Buffered rows could not be flushed.
    #[error("Error flushing CSV output: {0}")]
    Flush(#[from] std::io::Error),
}
