//! Repository discovery.
//!
//! Walks the organization's repository listing page by page, in order, until
//! the API reports there is no next page.

mod error;
mod repository;

pub use error::DiscoveryError;
pub use repository::RepositoryRecord;

use crate::config::ExportConfig;
use crate::github::RepositorySource;
use crate::rate_limit::RateLimiter;
use tracing::{debug, info, info_span, warn, Instrument};

/// Page the listing starts from.
const FIRST_PAGE: u32 = 1;

/// Lists every repository in the configured organization.
///
/// Pages are requested in increasing order starting from page 1. After each
/// page that reports a successor, the limiter pauses before the next request.
/// Repositories keep the order in which the API returned them.
///
/// # Errors
///
/// Returns [`DiscoveryError`] on the first page that fails. Repositories from
/// earlier pages are dropped.
pub async fn discover_repositories<S, L>(
    source: &S,
    limiter: &L,
    config: &ExportConfig,
) -> Result<Vec<RepositoryRecord>, DiscoveryError>
where
    S: RepositorySource,
    L: RateLimiter,
{
    let span = info_span!("discover", org = %config.org());

    async {
        info!(per_page = config.per_page(), "Fetching repositories");

        let mut repositories = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            let response = source
                .list_org_repositories(config.org(), page, config.per_page())
                .await
                .map_err(|source| DiscoveryError::Source { page, source })?;

            debug!(page, count = response.repositories.len(), "Received page");
            repositories.extend(response.repositories);

            let next = match response.next_page {
                None => {
                    info!(page, "Reached last page");
                    break;
                }
                Some(next) if next <= page => {
                    warn!(page, next, "Next page does not advance, stopping");
                    break;
                }
                Some(next) => next,
            };

            info!(page, last_page = ?response.last_page, "Fetched page");

            page = next;
            limiter.pause().await;
        }

        info!(count = repositories.len(), "Found repositories");
        Ok(repositories)
    }
    .instrument(span)
    .await
}
