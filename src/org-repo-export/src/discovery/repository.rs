//! Exported repository information.

use crate::github::LatestCommit;

/// A repository listed in the organization, plus its latest commit once
/// enrichment has run.
///
/// Every field may be absent upstream. The accessors return an empty string
/// for absent values, which is also how they are written to the CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: Option<String>,

    /// Repository page on GitHub.
    pub html_url: Option<String>,

    /// Free-form description.
    pub description: Option<String>,

    /// Time of the last push, already rendered as text.
    pub pushed_at: Option<String>,

    /// SHA of the most recent commit.
    pub commit_sha: Option<String>,

    /// Profile URL of the most recent commit's committer.
    pub committer_url: Option<String>,
}

impl RepositoryRecord {
    /// Returns the repository name, or `""`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the repository URL, or `""`.
    pub fn html_url(&self) -> &str {
        self.html_url.as_deref().unwrap_or_default()
    }

    /// Returns the description, or `""`.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Returns the last-pushed timestamp, or `""`.
    pub fn pushed_at(&self) -> &str {
        self.pushed_at.as_deref().unwrap_or_default()
    }

    /// Returns the latest commit SHA, or `""`.
    pub fn commit_sha(&self) -> &str {
        self.commit_sha.as_deref().unwrap_or_default()
    }

    /// Returns the latest committer's profile URL, or `""`.
    pub fn committer_url(&self) -> &str {
        self.committer_url.as_deref().unwrap_or_default()
    }

    /// Stores the commit fields from an enrichment lookup.
    pub fn set_latest_commit(&mut self, commit: LatestCommit) {
        self.commit_sha = commit.sha;
        self.committer_url = commit.committer_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_read_as_empty() {
        let record = RepositoryRecord::default();

        assert_eq!(record.name(), "");
        assert_eq!(record.html_url(), "");
        assert_eq!(record.description(), "");
        assert_eq!(record.pushed_at(), "");
        assert_eq!(record.commit_sha(), "");
        assert_eq!(record.committer_url(), "");
    }

    #[test]
    fn can_set_latest_commit() {
        let mut record = RepositoryRecord {
            name: Some("widgets".to_string()),
            ..Default::default()
        };

        record.set_latest_commit(LatestCommit {
            sha: Some("abc123".to_string()),
            committer_url: None,
        });

        assert_eq!(record.name(), "widgets");
        assert_eq!(record.commit_sha(), "abc123");
        assert_eq!(record.committer_url(), "");
    }
}
