//! Access to the GitHub REST API.
//!
//! [`RepositorySource`] is the seam between the export logic and GitHub.
//! [`GitHubSource`] implements it with `octocrab`; tests substitute in-memory
//! sources.

mod error;
mod page;

pub use error::SourceError;
pub use page::{LatestCommit, RepositoryPage};

use crate::discovery::RepositoryRecord;
use octocrab::models::repos::RepoCommit;
use octocrab::models::Repository;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use page::{format_pushed_at, page_from_link};
use tracing::debug;

/// Something that can list an organization's repositories and look up their
/// latest commits.
#[allow(async_fn_in_trait)]
pub trait RepositorySource {
    /// Fetches one page of the organization's repository listing.
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, SourceError>;

    /// Fetches the most recent commit of `owner/repo`.
    ///
    /// Returns `Ok(None)` when the repository has no commits.
    async fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<LatestCommit>, SourceError>;
}

/// [`RepositorySource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
}

impl GitHubSource {
    /// Builds a client authenticated with a personal access token.
    ///
    /// Failed requests are not retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self::from_octocrab(octocrab))
    }

    /// Wraps an already configured client.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

impl RepositorySource for GitHubSource {
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, SourceError> {
        debug!(org, page, per_page, "Listing organization repositories");

        let response = self
            .octocrab
            .orgs(org)
            .list_repos()
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        let next_page = match &response.next {
            Some(uri) => {
                let link = uri.to_string();
                let next = page_from_link(&link).ok_or_else(|| SourceError::MalformedResponse {
                    message: format!("next page link has no page number: {link}"),
                })?;
                Some(next)
            }
            None => None,
        };
        let last_page = response
            .last
            .as_ref()
            .and_then(|uri| page_from_link(&uri.to_string()));

        Ok(RepositoryPage {
            repositories: response.items.into_iter().map(record_from_repository).collect(),
            next_page,
            last_page,
        })
    }

    async fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<LatestCommit>, SourceError> {
        debug!(owner, repo, "Fetching latest commit");

        let response = self
            .octocrab
            .repos(owner, repo)
            .list_commits()
            .per_page(1u8)
            .send()
            .await?;

        Ok(response.items.into_iter().next().map(latest_commit_from))
    }
}

/// Converts an API repository into an export record with empty commit fields.
fn record_from_repository(repository: Repository) -> RepositoryRecord {
    RepositoryRecord {
        name: Some(repository.name).filter(|name| !name.is_empty()),
        html_url: repository.html_url.map(|url| url.to_string()),
        description: repository.description,
        pushed_at: repository.pushed_at.as_ref().map(format_pushed_at),
        commit_sha: None,
        committer_url: None,
    }
}

fn latest_commit_from(commit: RepoCommit) -> LatestCommit {
    LatestCommit {
        sha: Some(commit.sha).filter(|sha| !sha.is_empty()),
        committer_url: commit.committer.map(|committer| committer.html_url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn user(login: &str) -> Value {
        let api = format!("https://api.github.com/users/{login}");
        json!({
            "login": login,
            "id": 1001,
            "node_id": "MDQ6VXNlcjEwMDE=",
            "avatar_url": "https://avatars.githubusercontent.com/u/1001?v=4",
            "gravatar_id": "",
            "url": api,
            "html_url": format!("https://github.com/{login}"),
            "followers_url": format!("{api}/followers"),
            "following_url": format!("{api}/following{{/other_user}}"),
            "gists_url": format!("{api}/gists{{/gist_id}}"),
            "starred_url": format!("{api}/starred{{/owner}}{{/repo}}"),
            "subscriptions_url": format!("{api}/subscriptions"),
            "organizations_url": format!("{api}/orgs"),
            "repos_url": format!("{api}/repos"),
            "events_url": format!("{api}/events{{/privacy}}"),
            "received_events_url": format!("{api}/received_events"),
            "type": "User",
            "site_admin": false
        })
    }

    fn repository(value: Value) -> Repository {
        serde_json::from_value(value).unwrap()
    }

    fn commit(committer: Value) -> RepoCommit {
        serde_json::from_value(json!({
            "url": "https://api.github.com/repos/acme/widgets/commits/6dcb09b5",
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "node_id": "MDY6Q29tbWl0NmRjYjA5YjU=",
            "html_url": "https://github.com/acme/widgets/commit/6dcb09b5",
            "comments_url": "https://api.github.com/repos/acme/widgets/commits/6dcb09b5/comments",
            "commit": {
                "url": "https://api.github.com/repos/acme/widgets/git/commits/6dcb09b5",
                "author": {
                    "name": "Author Person",
                    "email": "author@example.com",
                    "date": "2023-04-05T06:07:08Z"
                },
                "committer": {
                    "name": "Committer Person",
                    "email": "committer@example.com",
                    "date": "2023-04-05T06:07:08Z"
                },
                "message": "Fix all the bugs",
                "tree": {
                    "url": "https://api.github.com/repos/acme/widgets/tree/6dcb09b5",
                    "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e"
                },
                "comment_count": 0,
                "verification": {
                    "verified": false,
                    "reason": "unsigned",
                    "signature": null,
                    "payload": null
                }
            },
            "author": user("author-person"),
            "committer": committer,
            "parents": []
        }))
        .unwrap()
    }

    #[test]
    fn maps_repository_fields() {
        let record = record_from_repository(repository(json!({
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "widgets",
            "full_name": "acme/widgets",
            "private": false,
            "html_url": "https://github.com/acme/widgets",
            "description": "Widget factory",
            "fork": false,
            "url": "https://api.github.com/repos/acme/widgets",
            "pushed_at": "2023-04-05T06:07:08Z"
        })));

        assert_eq!(
            record,
            RepositoryRecord {
                name: Some("widgets".to_string()),
                html_url: Some("https://github.com/acme/widgets".to_string()),
                description: Some("Widget factory".to_string()),
                pushed_at: Some("2023-04-05 06:07:08 +0000 UTC".to_string()),
                commit_sha: None,
                committer_url: None,
            }
        );
    }

    #[test]
    fn null_repository_fields_map_to_none() {
        let record = record_from_repository(repository(json!({
            "id": 1296270,
            "name": "",
            "url": "https://api.github.com/repos/acme/unnamed",
            "html_url": null,
            "description": null,
            "pushed_at": null
        })));

        assert_eq!(record, RepositoryRecord::default());
        assert_eq!(record.name(), "");
        assert_eq!(record.pushed_at(), "");
    }

    #[test]
    fn maps_commit_sha_and_committer_profile() {
        let latest = latest_commit_from(commit(user("committer-person")));

        assert_eq!(
            latest,
            LatestCommit {
                sha: Some("6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string()),
                committer_url: Some("https://github.com/committer-person".to_string()),
            }
        );
    }

    #[test]
    fn null_committer_leaves_committer_url_empty() {
        let latest = latest_commit_from(commit(Value::Null));

        assert_eq!(
            latest.sha.as_deref(),
            Some("6dcb09b5b57875f334f61aebed695e2e4193db5e")
        );
        assert_eq!(latest.committer_url, None);
    }
}
