//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Configuration is sparse:
//! stock defaults cover everything, and a user file overrides only the
//! values it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Blog"         # Site title shown by the application shell
//! base_path = "/"           # URL prefix stripped before route matching
//!
//! [placeholder]
//! posts = 100               # Size of the generated sample data set
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::placeholder::DEFAULT_SAMPLE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown by the application shell.
    #[serde(default = "default_title")]
    pub title: String,
    /// URL prefix the router strips before matching (e.g. `/blog` when the
    /// app is served from a subdirectory). Must start with `/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Placeholder data settings.
    pub placeholder: PlaceholderConfig,
}

fn default_title() -> String {
    "My Blog".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_path: default_base_path(),
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "base_path must start with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Placeholder data settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    /// Number of synthetic posts materialized at bootstrap.
    pub posts: usize,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            posts: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// Load `config.toml` from `dir`, falling back to stock defaults when the
/// file does not exist. The result is always validated.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}
