#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod discovery;
pub mod enrichment;
pub mod github;
pub mod output;
pub mod rate_limit;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, ExportConfig};
pub use discovery::{discover_repositories, DiscoveryError, RepositoryRecord};
pub use enrichment::{
    enrich_with_latest_commits, fetch_latest_commit, EnrichmentError, EnrichmentStats,
};
pub use github::{GitHubSource, LatestCommit, RepositoryPage, RepositorySource, SourceError};
pub use output::{write_csv, write_records, OutputError};
pub use rate_limit::{FixedDelay, NoDelay, RateLimiter};
pub use runner::{Exporter, RunnerError};
pub use summary::ExportSummary;
