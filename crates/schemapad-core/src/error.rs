//! # Codec Errors
//!
//! Failures raised while turning buffer text into values and back.
//!
//! The `Display` output of every variant is exactly the underlying parser
//! message, without a prefix. Status projections show these messages to the
//! user verbatim, one per line.

use thiserror::Error;

/// Error while parsing or serializing a document buffer.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The text is not well-formed JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The text is not well-formed YAML, or YAML emission failed.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML document is well-formed but uses something JSON cannot
    /// express (non-scalar map keys, NaN/infinite floats).
    #[error("{0}")]
    Unrepresentable(String),
}

impl CodecError {
    /// Short lowercase name of the failing layer, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Yaml(_) => "yaml",
            Self::Unrepresentable(_) => "unrepresentable",
        }
    }
}
