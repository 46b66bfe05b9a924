//! Phone-Scout main entry point
//!
//! This is the command-line interface for the Phone-Scout number finder.

use anyhow::Context;
use clap::Parser;
use phone_scout::config::load_config_or_default;
use phone_scout::crawler::find_number;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Phone-Scout: finds a company's main contact number
///
/// Scans the home page for a phone number and, when there is none, follows
/// the first contact link and scans that page. Prints the number exactly as
/// written on the page, or "Number cannot be found".
#[derive(Parser, Debug)]
#[command(name = "phone-scout")]
#[command(version)]
#[command(about = "Finds a company's main contact number", long_about = None)]
struct Cli {
    /// Home page URL of the company website
    #[arg(value_name = "URL")]
    url: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let output = find_number(&cli.url, &config)
        .await
        .with_context(|| format!("Search failed for {}", cli.url))?;

    println!("{}", output);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that stdout only carries the result line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("phone_scout=warn,warn"),
            1 => EnvFilter::new("phone_scout=info,warn"),
            2 => EnvFilter::new("phone_scout=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
