//! # Shell Configuration
//!
//! Settings are read from environment variables (a `.env` file is loaded by
//! the binary before this runs):
//!
//! - `COURSESCHED_DATA_FILE`: path of the JSON data file (default: `schedules_data.json`)
//! - `COURSESCHED_AUTOSAVE_SECONDS`: auto-save period in seconds (default: 5)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `COURSESCHED_PROMPT`: prompt shown before each command (default: "> ")

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, WrapErr, eyre};
use tracing::Level;

pub const DEFAULT_DATA_FILE: &str = "schedules_data.json";
pub const DEFAULT_AUTOSAVE_SECONDS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// JSON document holding every student's courses
    pub data_file: PathBuf,

    /// How often the active student is flushed to disk
    pub autosave_interval: Duration,

    /// Log level for the application
    pub log_level: Level,

    /// Prompt override
    pub prompt: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autosave_interval: Duration::from_secs(DEFAULT_AUTOSAVE_SECONDS),
            log_level: Level::INFO,
            prompt: None,
        }
    }
}

impl ShellConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `COURSESCHED_AUTOSAVE_SECONDS` is not a positive
    /// integer.
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("COURSESCHED_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let autosave_interval = match env::var("COURSESCHED_AUTOSAVE_SECONDS") {
            Ok(raw) => parse_autosave_seconds(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_AUTOSAVE_SECONDS),
        };

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let prompt = env::var("COURSESCHED_PROMPT").ok();

        Ok(Self {
            data_file,
            autosave_interval,
            log_level,
            prompt,
        })
    }

    /// Get the prompt (defaults to "> " if not set)
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("> ")
    }
}

pub fn parse_autosave_seconds(raw: &str) -> Result<Duration> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .wrap_err("Invalid COURSESCHED_AUTOSAVE_SECONDS value")?;

    if seconds == 0 {
        return Err(eyre!("COURSESCHED_AUTOSAVE_SECONDS must be greater than zero"));
    }

    Ok(Duration::from_secs(seconds))
}

/// Unknown levels fall back to `INFO`.
pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
