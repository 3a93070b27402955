//! owu-archiver main entry point
//!
//! Thin command-line wrapper over the library: builds a `CrawlConfig`
//! from the arguments, runs the crawl and prints the discovery report.

use anyhow::Context;
use clap::Parser;
use owu_archiver::config::{CrawlConfig, DEFAULT_MAX_DEPTH};
use owu_archiver::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Archives insurance policy-terms (OWU) documents from an insurer's
/// website, together with the response headers used to detect changes.
#[derive(Parser, Debug)]
#[command(name = "owu-archiver")]
#[command(version)]
#[command(about = "Archive OWU documents from an insurer's website", long_about = None)]
struct Cli {
    /// Seed URL, the main page of the site to crawl
    #[arg(value_name = "URL")]
    seed_url: String,

    /// Number of breadth-first expansion iterations from the seed
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Directory receiving the manifest and the downloaded documents
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = CrawlConfig::new(cli.seed_url);
    config.max_depth = cli.depth;
    config.data_dir = cli.data_dir;

    tracing::info!(
        "crawling {} with max depth {}",
        config.seed_url,
        config.max_depth
    );

    let summary = crawl(config).await.context("crawl failed")?;

    println!("Discovered domains ({}):", summary.domains.len());
    for domain in &summary.domains {
        println!("  {domain}");
    }

    println!("\nVisited pages ({}):", summary.visited.len());
    for (url, headers) in &summary.visited {
        match &headers.last_modified {
            Some(modified) => println!(
                "  {url}: {} {} bytes, modified {modified}",
                headers.content_type, headers.content_length
            ),
            None => println!(
                "  {url}: {} {} bytes",
                headers.content_type, headers.content_length
            ),
        }
    }

    println!(
        "\n{} documents recorded in {}",
        summary.records.len(),
        summary.manifest_path.display()
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("owu_archiver=info,warn"),
            1 => EnvFilter::new("owu_archiver=debug,info"),
            2 => EnvFilter::new("owu_archiver=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
