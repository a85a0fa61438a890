//! CLI for the GitHub to Jira issue migrator.
//!
//! Reads the migrator configuration, moves every matching GitHub issue into
//! Jira and prints a summary of the run.

use clap::Parser;
use github_jira_migrator::{
    MigrationResult, MigratorConfig, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub to Jira migrator - Move labelled GitHub issues into Jira tickets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (`.json` or `.toml`).
    #[arg(long, env = "MIGRATOR_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Build ticket payloads without creating tickets or closing issues.
    #[arg(long)]
    dry_run: bool,

    /// Process at most this many issues.
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    println!("...Start");
    let result = run(args).await;
    match &result {
        Ok(summary) => {
            print_summary(summary);
            println!("...End");
        }
        Err(e) => error!(error = %e, "Critical failure"),
    }

    ExitCode::from(exit_status(&result))
}

/// Exit status for a finished run.
///
/// Failed issues and an aborted run are reported on the console only; the
/// process exits with 0 either way.
fn exit_status(result: &Result<RunSummary, RunnerError>) -> u8 {
    match result {
        Ok(summary) if summary.has_failures() => 0,
        Ok(_) => 0,
        Err(_) => 0,
    }
}

/// Initializes tracing with environment filter support.
///
/// Log events go to stderr so stdout only carries progress markers and the
/// run summary. Verbosity follows `RUST_LOG`, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = MigratorConfig::load(&args.config)?;
    let runner_config = RunnerConfig::from_migrator_config(&config)
        .with_dry_run(args.dry_run)
        .with_limit(args.limit);

    let runner = Runner::connect(&config, runner_config)?;
    let issues = runner.fetch_issues().await?;
    println!("Issues found: {}", issues.len());

    Ok(runner.migrate(issues).await)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues migrated: {}", summary.migrated);
    println!("  Issues skipped: {}", summary.skipped);
    println!("  Issues failed: {}", summary.failed);

    for failure in summary.failures() {
        if let MigrationResult::Failed {
            issue_url,
            stage,
            ticket_key,
            error,
            ..
        } = failure
        {
            match ticket_key {
                Some(key) => println!("    {issue_url} ({stage:?}, ticket {key}): {error}"),
                None => println!("    {issue_url} ({stage:?}): {error}"),
            }
        }
    }
}
