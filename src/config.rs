use crate::error::{config_error, ReportResult};
use chrono::Weekday;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;

/// Default command used to fetch the raw calendar payload
pub const DEFAULT_FETCH_COMMAND: &str = "./get-calendar-events.sh";

/// Default ignore-list file, one title fragment per line
pub const DEFAULT_IGNORE_FILE: &str = "ignored-events.txt";

/// Default timeout for the fetch subprocess, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the report tool
#[derive(Debug, Clone)]
pub struct Config {
    /// Shell command that prints the calendar payload on stdout
    pub fetch_command: String,
    /// Path to the ignored-events file
    pub ignore_file: String,
    /// Timeout for the fetch subprocess, in seconds
    pub fetch_timeout_secs: u64,
    /// First day of the reporting week
    pub week_starts_on: Weekday,
}

/// Optional file overrides, merged on top of the environment
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    fetch_command: Option<String>,
    ignore_file: Option<String>,
    fetch_timeout_secs: Option<u64>,
    week_starts_on: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> ReportResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut fetch_command =
            env::var("CALENDAR_FETCH_COMMAND").unwrap_or_else(|_| String::from(DEFAULT_FETCH_COMMAND));
        let mut ignore_file =
            env::var("IGNORED_EVENTS_FILE").unwrap_or_else(|_| String::from(DEFAULT_IGNORE_FILE));

        let mut fetch_timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| config_error("Invalid FETCH_TIMEOUT_SECS format"))?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let mut week_starts_on = env::var("WEEK_STARTS_ON").unwrap_or_else(|_| String::from("monday"));

        // Merge overrides from the config file if it exists
        if let Ok(content) = fs::read_to_string("config/report.toml") {
            let file_config: FileConfig = toml::from_str(&content)?;
            if let Some(value) = file_config.fetch_command {
                fetch_command = value;
            }
            if let Some(value) = file_config.ignore_file {
                ignore_file = value;
            }
            if let Some(value) = file_config.fetch_timeout_secs {
                fetch_timeout_secs = value;
            }
            if let Some(value) = file_config.week_starts_on {
                week_starts_on = value;
            }
        }

        let week_starts_on = week_starts_on
            .parse::<Weekday>()
            .map_err(|_| config_error(&format!("Invalid week start day: {}", week_starts_on)))?;

        Ok(Config {
            fetch_command,
            ignore_file,
            fetch_timeout_secs,
            week_starts_on,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fetch_command: String::from(DEFAULT_FETCH_COMMAND),
            ignore_file: String::from(DEFAULT_IGNORE_FILE),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            week_starts_on: Weekday::Mon,
        }
    }
}
