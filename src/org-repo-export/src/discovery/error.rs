//! Repository discovery error types.

use crate::github::SourceError;
use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A listing page could not be fetched.
    #[error("Failed to list repositories (page {page}): {source}")]
    Source {
        page: u32,
        #[source]
        source: SourceError,
    },
}
