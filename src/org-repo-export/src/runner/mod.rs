//! Orchestrates an export run: discover, enrich, serialize.

mod error;

pub use error::RunnerError;

use crate::config::ExportConfig;
use crate::discovery::discover_repositories;
use crate::enrichment::enrich_with_latest_commits;
use crate::github::{GitHubSource, RepositorySource};
use crate::output::write_csv;
use crate::rate_limit::{FixedDelay, RateLimiter};
use crate::summary::ExportSummary;
use tracing::{error, info};

/// Runs a full organization export.
pub struct Exporter<S, L> {
    config: ExportConfig,
    source: S,
    limiter: L,
}

impl Exporter<GitHubSource, FixedDelay> {
    /// Builds an exporter that talks to GitHub and sleeps for the configured
    /// delay between requests.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the GitHub client cannot be built.
    pub fn from_config(config: ExportConfig) -> Result<Self, RunnerError> {
        let source = GitHubSource::new(config.token())?;
        let limiter = FixedDelay::new(config.delay());
        Ok(Self::new(config, source, limiter))
    }
}

impl<S, L> Exporter<S, L>
where
    S: RepositorySource,
    L: RateLimiter,
{
    /// Creates an exporter from its parts.
    pub fn new(config: ExportConfig, source: S, limiter: L) -> Self {
        Self {
            config,
            source,
            limiter,
        }
    }

    /// Returns the repository source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Executes the export.
    ///
    /// Commit lookup failures and CSV write failures are reported in the
    /// returned summary rather than as errors.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Discovery`] if the repository listing fails. No
    /// file is written in that case.
    pub async fn run(&self) -> Result<ExportSummary, RunnerError> {
        let mut summary = ExportSummary::new(self.config.org());

        let mut repositories =
            discover_repositories(&self.source, &self.limiter, &self.config).await?;
        summary.repositories_discovered = repositories.len();

        let stats = enrich_with_latest_commits(
            &self.source,
            &self.limiter,
            self.config.org(),
            &mut repositories,
        )
        .await;
        summary.record_enrichment(&stats);

        match write_csv(self.config.output(), &repositories) {
            Ok(rows) => {
                info!(path = %self.config.output().display(), rows, "Wrote CSV");
                summary.rows_written = rows;
            }
            Err(e) => {
                error!(error = %e, "Failed to write CSV");
                summary.output_error = Some(e.to_string());
            }
        }

        Ok(summary)
    }
}
