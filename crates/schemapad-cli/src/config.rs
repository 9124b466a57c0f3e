//! # CLI Configuration
//!
//! Optional YAML file read at startup. Lookup order:
//!
//! 1. `--config <PATH>` (must exist).
//! 2. `schemapad.yaml` in the working directory, if present.
//! 3. Built-in defaults.
//!
//! `SCHEMAPAD_SHARE_BASE_URL` overrides `share_base_url` from any source.
//!
//! ```yaml
//! share_base_url: https://schemapad.example/
//! default_format: yaml
//! draft: draft7
//! log_format: json
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use schemapad_core::InputFormat;
use schemapad_schema::SchemaDraft;
use schemapad_share::{parse_url, Url};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "schemapad.yaml";

/// Environment variable overriding [`CliConfig::share_base_url`].
pub const SHARE_BASE_URL_ENV: &str = "SCHEMAPAD_SHARE_BASE_URL";

const DEFAULT_SHARE_BASE_URL: &str = "https://schemapad.invalid/";

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Page URL that `share` rewrites when no `--url` is given.
    pub share_base_url: String,
    /// Input format when neither a flag nor the file extension decides.
    pub default_format: Option<InputFormat>,
    /// Draft pinned for schema compilation; detected from `$schema` if unset.
    pub draft: Option<SchemaDraft>,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            default_format: None,
            draft: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("invalid share_base_url: {0}")]
    InvalidShareUrl(String),
}

impl CliConfig {
    /// Resolve the configuration for a run started in `cwd`.
    ///
    /// # Errors
    ///
    /// Fails if an explicit file is missing, or any chosen file is not
    /// valid YAML for this structure.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };
        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(SHARE_BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.share_base_url = url;
        }
    }

    /// [`share_base_url`](Self::share_base_url) as a parsed URL.
    pub fn share_base_url(&self) -> Result<Url, ConfigError> {
        parse_url(&self.share_base_url).map_err(|e| ConfigError::InvalidShareUrl(e.to_string()))
    }
}
