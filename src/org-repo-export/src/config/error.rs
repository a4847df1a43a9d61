//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the export configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access token was supplied.
    #[error("Must provide an oauth token with --token.")]
    MissingToken,

    /// A setting has a value the GitHub API would reject.
    #[error("Invalid value for {setting}: {message}")]
    Invalid {
        setting: &'static str,
        message: String,
    },
}
