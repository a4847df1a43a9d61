//! Values exchanged with a repository source.

use crate::discovery::RepositoryRecord;
use chrono::{DateTime, Utc};
use url::Url;

/// One page of an organization's repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Repositories on this page, in API order.
    pub repositories: Vec<RepositoryRecord>,

    /// Index of the following page, if there is one.
    pub next_page: Option<u32>,

    /// Index of the final page, when the API reports it.
    pub last_page: Option<u32>,
}

/// The most recent commit of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestCommit {
    /// Commit SHA.
    pub sha: Option<String>,

    /// Profile URL of the GitHub user recorded as committer.
    pub committer_url: Option<String>,
}

/// Reads the `page` query parameter from a pagination link.
///
/// Returns `None` if the link is not a URL or has no numeric `page`.
pub(crate) fn page_from_link(link: &str) -> Option<u32> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Renders a push timestamp as `YYYY-MM-DD HH:MM:SS +0000 UTC`.
pub(crate) fn format_pushed_at(pushed_at: &DateTime<Utc>) -> String {
    pushed_at.format("%Y-%m-%d %H:%M:%S %z UTC").to_string()
}
