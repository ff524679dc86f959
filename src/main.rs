//! Pagelens main entry point
//!
//! This is the command-line interface for the Pagelens on-page SEO auditor.

use clap::Parser;
use pagelens::config::{default_config, load_config, Config};
use pagelens::pipeline::{parse_url_list, Analyzer};
use pagelens::report::{render_summary, write_csv_export, write_json_export, UrlReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagelens: an on-page SEO and content quality auditor
///
/// Pagelens fetches each submitted URL, audits its HTML structure and
/// readability, detects missing structured-data markup, and asks a
/// text-completion service for topical gaps and improvements.
#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(version = "1.0.0")]
#[command(about = "An on-page SEO and content quality auditor", long_about = None)]
struct Cli {
    /// Path to a newline-separated URL list (at most 500 entries)
    #[arg(value_name = "URLS_FILE")]
    urls: PathBuf,

    /// Path to TOML configuration file (defaults used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the full reports to this path as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write a flattened per-URL table to this path as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Validate config and URL list, show what would be analyzed, then exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => default_config()?,
    };

    // Read and validate the URL list before anything touches the network
    let submission = std::fs::read_to_string(&cli.urls)?;
    let urls = parse_url_list(&submission, config.batch.max_urls)?;

    if cli.dry_run {
        handle_dry_run(&config, &urls);
        return Ok(());
    }

    handle_analysis(config, urls, cli.json, cli.csv).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelens=info,warn"),
            1 => EnvFilter::new("pagelens=debug,info"),
            2 => EnvFilter::new("pagelens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &Config, urls: &[String]) {
    println!("=== Pagelens Dry Run ===\n");

    println!("Reasoning service:");
    println!("  Endpoint: {}", config.reasoning.endpoint);
    println!("  Model: {}", config.reasoning.model);
    println!("  API key from: ${}", config.reasoning.api_key_env);

    println!("\nBatch:");
    println!("  Max URLs: {}", config.batch.max_urls);
    println!("  Max concurrent: {}", config.batch.max_concurrent);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nURLs ({}):", urls.len());
    for url in urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would analyze {} URLs", urls.len());
}

/// Handles the main analysis run and exports
async fn handle_analysis(
    config: Config,
    urls: Vec<String>,
    json_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var(&config.reasoning.api_key_env).ok();
    if api_key.is_none() {
        tracing::warn!(
            "{} is not set; reasoning-dependent fields will carry error markers",
            config.reasoning.api_key_env
        );
    }

    let analyzer = Analyzer::new(config, api_key)?;
    let reports: Vec<UrlReport> = analyzer.analyze_batch(&urls).await;

    print!("{}", render_summary(&reports));

    if let Some(path) = json_path {
        write_json_export(&reports, &path)?;
        println!("✓ JSON report written to: {}", path.display());
    }

    if let Some(path) = csv_path {
        write_csv_export(&reports, &path)?;
        println!("✓ CSV export written to: {}", path.display());
    }

    Ok(())
}
