//! Latest-commit enrichment.
//!
//! Looks up the most recent commit of each discovered repository. A failed
//! lookup is logged and leaves that repository's commit fields empty; it never
//! stops the run.

use crate::discovery::RepositoryRecord;
use crate::github::{LatestCommit, RepositorySource, SourceError};
use crate::rate_limit::RateLimiter;
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

/// Errors that can occur while looking up a repository's latest commit.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The repository has no name to query by.
    #[error("Repository has no name")]
    UnnamedRepository,

    /// The commit listing request failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Outcome counts of an enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Repositories whose latest commit was found.
    pub resolved: usize,

    /// Repositories that have no commits.
    pub empty: usize,

    /// Repositories whose lookup failed.
    pub failed: usize,
}

/// Fetches the latest commit of a single repository.
///
/// # Errors
///
/// Returns [`EnrichmentError::UnnamedRepository`] without contacting the
/// source if the record has no name, or the source's error otherwise.
pub async fn fetch_latest_commit<S: RepositorySource>(
    source: &S,
    owner: &str,
    repository: &RepositoryRecord,
) -> Result<Option<LatestCommit>, EnrichmentError> {
    let name = repository
        .name
        .as_deref()
        .ok_or(EnrichmentError::UnnamedRepository)?;
    Ok(source.latest_commit(owner, name).await?)
}

/// Fills in the latest commit of every repository, in order.
///
/// The limiter pauses after every repository, including ones whose lookup
/// failed.
pub async fn enrich_with_latest_commits<S, L>(
    source: &S,
    limiter: &L,
    owner: &str,
    repositories: &mut [RepositoryRecord],
) -> EnrichmentStats
where
    S: RepositorySource,
    L: RateLimiter,
{
    let span = info_span!("enrich", org = %owner, count = repositories.len());

    async {
        let mut stats = EnrichmentStats::default();

        for repository in repositories.iter_mut() {
            match fetch_latest_commit(source, owner, repository).await {
                Ok(Some(commit)) => {
                    repository.set_latest_commit(commit);
                    stats.resolved += 1;
                }
                Ok(None) => {
                    warn!(repo = %repository.name(), "Repository has no commits");
                    stats.empty += 1;
                }
                Err(e) => {
                    warn!(repo = %repository.name(), error = %e, "Error getting commits");
                    stats.failed += 1;
                }
            }

            limiter.pause().await;
        }

        info!(
            resolved = stats.resolved,
            empty = stats.empty,
            failed = stats.failed,
            "Commit lookup complete"
        );
        stats
    }
    .instrument(span)
    .await
}
