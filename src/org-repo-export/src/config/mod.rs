//! Export configuration.
//!
//! The configuration is built once at startup, validated, and then handed to
//! discovery and enrichment by reference. Nothing mutates it afterwards.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Organization exported when none is given.
pub const DEFAULT_ORG: &str = "illuminateeducation";

/// Pause between API requests, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 250;

/// File the CSV is written to when none is given.
pub const DEFAULT_OUTPUT: &str = "results.csv";

/// Repositories requested per listing page.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Largest page size the GitHub REST API accepts.
const MAX_PER_PAGE: u32 = 100;

/// Settings for a single export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// GitHub token used for every API call.
    token: String,
    /// Organization whose repositories are listed.
    org: String,
    /// Pause between API requests.
    delay: Duration,
    /// Path of the CSV file to write.
    output: PathBuf,
    /// Page size for repository listing.
    per_page: u8,
}

impl ExportConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if `token` is blank, and
    /// [`ConfigError::Invalid`] if `org` is blank. A `per_page` outside
    /// `1..=100` is clamped into that range.
    pub fn new(
        token: impl Into<String>,
        org: impl Into<String>,
        delay_ms: u64,
        output: impl Into<PathBuf>,
        per_page: u32,
    ) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let org = org.into();
        if org.trim().is_empty() {
            return Err(ConfigError::Invalid {
                setting: "org",
                message: "organization name is empty".to_string(),
            });
        }

        let clamped = per_page.clamp(1, MAX_PER_PAGE);
        if clamped != per_page {
            warn!(
                requested = per_page,
                used = clamped,
                "Page size out of range, clamping"
            );
        }

        Ok(Self {
            token,
            org,
            delay: Duration::from_millis(delay_ms),
            output: output.into(),
            // Clamped to 1..=100 above.
            per_page: clamped as u8,
        })
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the organization name.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the pause between API requests.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the output CSV path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the listing page size.
    pub fn per_page(&self) -> u8 {
        self.per_page
    }
}
