//! Runtime configuration.
//!
//! Defaults come from the environment (a `.env` file is loaded first by the
//! binary); command line flags override them.

use crate::models::SortOrder;
use std::str::FromStr;

pub const ENV_SORT: &str = "VLSM_SORT";
pub const ENV_FORMAT: &str = "VLSM_FORMAT";
pub const ENV_LOG_CONFIG: &str = "VLSM_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How allocation results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sort_order: SortOrder,
    pub format: OutputFormat,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sort_order: SortOrder::default(),
            format: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(sort) = lookup(ENV_SORT) {
            config.sort_order = SortOrder::from_text(&sort);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => log::warn!("{ENV_FORMAT}: {e}, using {:?}", config.format),
            }
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        config
    }
}
