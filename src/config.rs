//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (`--config` or `TRAYWISE_CONFIG`), then command line flags.

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::flow::FlowTimings;

pub const CONFIG_ENV: &str = "TRAYWISE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated scan duration before the results screen appears.
    pub scan_delay_ms: u64,
    /// How long the finish screen stays up before returning to landing.
    pub finish_delay_ms: u64,
    /// Preferred UI locale such as `en_us` or `zh_chs`.
    pub locale: Option<String>,
    /// Write a JSON status snapshot here after every state change.
    pub status_dump: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_delay_ms: FlowTimings::DEFAULT_SCAN_DELAY_MS,
            finish_delay_ms: FlowTimings::DEFAULT_FINISH_DELAY_MS,
            locale: None,
            status_dump: None,
        }
    }
}

impl AppConfig {
    pub fn timings(&self) -> FlowTimings {
        FlowTimings::from_millis(self.scan_delay_ms, self.finish_delay_ms)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("Failed to parse config: {err}"))
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Resolve the configuration for this run from the file (if any) and CLI flags.
    pub fn resolve(matches: &ArgMatches) -> Result<Self> {
        let path = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                log::info!("📂 Loading config from {}", path.display());
                Self::load_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_matches(matches);
        log::info!("Resolved config: {config:?}");
        Ok(config)
    }

    fn apply_matches(&mut self, matches: &ArgMatches) {
        if let Some(ms) = matches.get_one::<u64>("scan-delay") {
            self.scan_delay_ms = *ms;
        }
        if let Some(ms) = matches.get_one::<u64>("finish-delay") {
            self.finish_delay_ms = *ms;
        }
        if let Some(locale) = matches.get_one::<String>("lang") {
            self.locale = Some(locale.clone());
        }
        if let Some(path) = matches.get_one::<String>("status-dump") {
            self.status_dump = Some(PathBuf::from(path));
        }
    }
}
