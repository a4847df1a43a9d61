//! Run summary.

use crate::enrichment::EnrichmentStats;

/// Summary of a completed export.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Organization that was exported.
    pub organization: String,

    /// Number of repositories listed.
    pub repositories_discovered: usize,

    /// Number of repositories whose latest commit was found.
    pub commits_resolved: usize,

    /// Number of repositories without any commits.
    pub commits_missing: usize,

    /// Number of commit lookups that failed.
    pub commits_failed: usize,

    /// Number of CSV rows written.
    pub rows_written: usize,

    /// Why the CSV could not be written, if it could not.
    pub output_error: Option<String>,
}

impl ExportSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Default::default()
        }
    }

    /// Adds the counts from a commit enrichment pass.
    pub fn record_enrichment(&mut self, stats: &EnrichmentStats) {
        self.commits_resolved += stats.resolved;
        self.commits_missing += stats.empty;
        self.commits_failed += stats.failed;
    }

    /// Returns true if any commit lookup failed.
    #[must_use]
    pub fn has_commit_failures(&self) -> bool {
        self.commits_failed > 0
    }

    /// Returns true if the CSV file was written.
    #[must_use]
    pub fn output_written(&self) -> bool {
        self.output_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_enrichment() {
        let mut summary = ExportSummary::new("acme");

        summary.record_enrichment(&EnrichmentStats {
            resolved: 3,
            empty: 1,
            failed: 2,
        });

        assert_eq!(summary.organization, "acme");
        assert_eq!(summary.commits_resolved, 3);
        assert_eq!(summary.commits_missing, 1);
        assert_eq!(summary.commits_failed, 2);
        assert!(summary.has_commit_failures());
        assert!(summary.output_written());
    }
}
