// Workshop configuration, loaded from TOML or JSON.

use crate::error::{Result, WorkshopError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV: &str = "WORKSHOP_CONFIG";

/// Largest accepted `stream.bound`. The stream lesson walks about
/// `bound² / 2` naturals.
pub const MAX_STREAM_BOUND: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyConfig {
    /// Generator size: integers are drawn from `-size..=size`.
    pub size: u32,
    /// Number of random trials per property.
    pub tries: u32,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        PropertyConfig {
            size: 100,
            tries: 1_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Upper (exclusive) bound for the square roots taken from the stream.
    pub bound: f64,
    /// How many roots the lesson prints before summarising.
    pub preview: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            bound: 100.0,
            preview: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkshopConfig {
    pub property: PropertyConfig,
    pub stream: StreamConfig,
    pub log: LogConfig,
}

impl WorkshopConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WorkshopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: WorkshopConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Loads `path` if given, otherwise the file named by `WORKSHOP_CONFIG`,
    /// otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.property.tries == 0 {
            return Err(WorkshopError::invalid_config(
                "property.tries",
                "must be greater than 0",
            ));
        }
        if self.property.size == 0 {
            return Err(WorkshopError::invalid_config(
                "property.size",
                "must be greater than 0",
            ));
        }
        if !self.stream.bound.is_finite() || self.stream.bound <= 0.0 {
            return Err(WorkshopError::invalid_config(
                "stream.bound",
                format!("{} is not a positive finite number", self.stream.bound),
            ));
        }
        if self.stream.bound > MAX_STREAM_BOUND {
            return Err(WorkshopError::invalid_config(
                "stream.bound",
                format!("{} exceeds the maximum of {MAX_STREAM_BOUND}", self.stream.bound),
            ));
        }
        Ok(())
    }
}
