//! Harness configuration, read from environment variables.

use core::str::FromStr;
use std::path::PathBuf;

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const CATALOG_VAR: &str = "GILDED_ROSE_CATALOG";
pub const OUTPUT_VAR: &str = "GILDED_ROSE_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

/// Days simulated when nothing else is configured.
pub const DEFAULT_DAYS: u32 = 2;

/// Longest run accepted. Every simulated day keeps a copy of the stock.
pub const MAX_DAYS: u32 = 10_000;

/// How the per-day report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::validation(format!(
                "{OUTPUT_VAR}: unknown output format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub days: u32,
    /// JSON catalog to load instead of the built-in stock.
    pub catalog_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            catalog_path: None,
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl SimulationConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset or blank variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(days) = get(DAYS_VAR) {
            config.days = parse_days(&days)?;
        }
        config.catalog_path = get(CATALOG_VAR).map(PathBuf::from);
        if let Some(output) = get(OUTPUT_VAR) {
            config.output = output.parse()?;
        }
        if let Some(format) = get(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }
        Ok(config)
    }

    /// Apply a day count given on the command line, which wins over the environment.
    pub fn with_days_arg(mut self, arg: Option<&str>) -> DomainResult<Self> {
        if let Some(days) = arg {
            self.days = parse_days(days)?;
        }
        Ok(self)
    }
}

fn parse_days(raw: &str) -> DomainResult<u32> {
    let days = raw.trim().parse::<u32>().map_err(|e| {
        DomainError::validation(format!("{DAYS_VAR}: invalid day count {raw:?}: {e}"))
    })?;
    if days > MAX_DAYS {
        return Err(DomainError::validation(format!(
            "{DAYS_VAR}: day count {days} exceeds the maximum of {MAX_DAYS}"
        )));
    }
    Ok(days)
}
