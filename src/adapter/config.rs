//! Configuration
//!
//! Optional JSON config file. Every key has a default, so an empty object
//! (or no file at all) yields a working configuration.

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use thiserror::Error;

use crate::application::dto::upload_settings::{
    UploadSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub use_system_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_system_proxy: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", expanded))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The base URL must be absolute and able to carry path segments
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(())
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings::new(
            self.base_url.clone(),
            Duration::from_secs(self.connect_timeout_secs),
            Duration::from_secs(self.read_timeout_secs),
            self.use_system_proxy,
        )
    }
}
