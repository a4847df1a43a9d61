//! GitHub source error types.

use thiserror::Error;

/// Errors returned by a [`RepositorySource`](super::RepositorySource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The response could not be interpreted.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}
