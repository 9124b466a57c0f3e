//! # Input Formats
//!
//! The serialization used for the input buffer. The schema buffer is always
//! JSON; only sample data may be written as YAML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Serialization of the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON text, pretty-printed with two-space indentation.
    #[default]
    Json,
    /// YAML text, emitted with `serde_yaml` defaults.
    Yaml,
}

impl InputFormat {
    /// All formats, in the order a format picker lists them.
    pub const ALL: [InputFormat; 2] = [InputFormat::Json, InputFormat::Yaml];

    /// Lowercase identifier (`"json"` or `"yaml"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a file extension.
    ///
    /// `.yaml` and `.yml` map to YAML, `.json` to JSON. Anything else,
    /// including no extension, yields `None` so the caller can fall back to
    /// a configured default.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input format '{0}' (expected json or yaml)")]
pub struct UnknownFormat(pub String);

impl FromStr for InputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
