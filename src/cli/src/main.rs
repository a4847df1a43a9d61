//! CLI for the organization repository exporter.
//!
//! Lists every repository in a GitHub organization, looks up each one's most
//! recent commit, and writes the result to a CSV file.

use clap::Parser;
use org_repo_export::config::{DEFAULT_DELAY_MS, DEFAULT_ORG, DEFAULT_OUTPUT, DEFAULT_PER_PAGE};
use org_repo_export::{ExportConfig, ExportSummary, Exporter, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Export the repositories of a GitHub organization to CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub auth token.
    #[arg(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// GitHub organization.
    #[arg(long, default_value = DEFAULT_ORG)]
    org: String,

    /// Delay in ms between GitHub API requests to prevent rate-limiting.
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Path to CSV to write results.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of results per page.
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    per_page: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Both ring and aws-lc-rs are compiled in, so rustls cannot pick one itself.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            println!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Export failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output without module targets. The level comes from
/// `RUST_LOG` and defaults to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<ExportSummary, RunnerError> {
    let config = ExportConfig::new(
        args.token,
        args.org,
        args.delay,
        args.output,
        args.per_page,
    )?;
    let exporter = Exporter::from_config(config)?;
    exporter.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &ExportSummary) {
    println!("\nSummary:");
    println!("  Organization: {}", summary.organization);
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Commits resolved: {}", summary.commits_resolved);
    println!("  Repositories without commits: {}", summary.commits_missing);
    println!("  Commit lookups failed: {}", summary.commits_failed);

    match &summary.output_error {
        None => println!("  Rows written: {}", summary.rows_written),
        Some(e) => println!("  CSV not written: {e}"),
    }
}
