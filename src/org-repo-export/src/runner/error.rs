//! Runner error types.

/// Errors that end an export run early.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The repository listing could not be completed.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),
}
