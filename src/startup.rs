use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use crate::report::ignore::IgnoreList;
use crate::report::window::week_window;
use crate::{fetch, render, report};
use chrono::Local;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging(verbose: bool) -> miette::Result<()> {
    let default_filter = if verbose {
        "viikkoraportti=debug,info"
    } else {
        "info"
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Fetch, filter, aggregate and print the weekly report
pub async fn run_report(config: &Config, cli: &Cli) -> miette::Result<()> {
    let window = week_window(
        Local::now().date_naive(),
        cli.week_selection(),
        config.week_starts_on,
    );
    info!("Reporting window: {} to {}", window.start, window.end);

    let ignore = IgnoreList::load(&config.ignore_file)?;
    if ignore.is_empty() {
        debug!("Ignore list is empty");
    }

    let items = fetch::fetch_calendar_items(&config.fetch_command, config.fetch_timeout_secs).await?;

    let week_report = report::build_report(&items, &window, &ignore);
    render::print_report(&week_report);

    Ok(())
}
