//! perf-compare CLI - Benchmark regression detection for CI
//!
//! Compares a current benchmark run against a baseline and reports
//! regressions, with an exit code suitable for CI gating.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

use perf_compare::{
    compare::{compare_records, CompareConfig},
    data::Severity,
    loader,
    report::{render_report, ReportFormat},
};

/// perf-compare: compare benchmark results and detect regressions
#[derive(Parser, Debug)]
#[command(name = "perf-compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Baseline benchmark results JSON file
    baseline: PathBuf,

    /// Current benchmark results JSON file
    current: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: ReportFormat,

    /// Warning threshold percentage
    #[arg(long, default_value_t = 20.0)]
    warning_threshold: f64,

    /// Critical threshold percentage
    #[arg(long, default_value_t = 50.0)]
    critical_threshold: f64,

    /// Exit with code 1 if critical regressions are detected
    #[arg(long)]
    fail_on_regression: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if !cli.baseline.exists() {
        error!("Baseline file not found: {}", cli.baseline.display());
        std::process::exit(1);
    }
    if !cli.current.exists() {
        error!("Current results file not found: {}", cli.current.display());
        std::process::exit(1);
    }

    let config = CompareConfig::new(cli.warning_threshold, cli.critical_threshold)
        .context("Invalid threshold configuration")?;

    // Attempt both loads before bailing so both diagnostics are surfaced.
    info!("Loading baseline from {}", cli.baseline.display());
    let baseline = loader::load_records(&cli.baseline);

    info!("Loading current results from {}", cli.current.display());
    let current = loader::load_records(&cli.current);

    if baseline.is_empty() {
        error!("No baseline results loaded");
    }
    if current.is_empty() {
        error!("No current results loaded");
    }
    if baseline.is_empty() || current.is_empty() {
        std::process::exit(1);
    }

    info!(
        "Loaded {} baseline and {} current results",
        baseline.len(),
        current.len()
    );

    let comparisons = compare_records(&baseline, &current, &config);

    if comparisons.is_empty() {
        warn!("No common benchmarks found for comparison");
        return Ok(());
    }

    let rendered = render_report(&comparisons, cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    let critical_count = comparisons
        .iter()
        .filter(|c| c.severity == Severity::Critical)
        .count();

    if critical_count > 0 {
        if cli.fail_on_regression {
            error!(
                "{} critical performance regressions detected",
                critical_count
            );
            std::process::exit(1);
        }
        warn!(
            "{} critical performance regressions detected",
            critical_count
        );
    }

    Ok(())
}
