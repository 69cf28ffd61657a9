mod cli;
mod config;
mod error;
mod fetch;
mod render;
mod report;
mod startup;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging
    startup::init_logging(cli.verbose)?;

    debug!("Starting viikkoraportti");

    // Load configuration
    let config = startup::load_config()?;

    // Build and print the report
    startup::run_report(&config, &cli).await
}
