//! # schemapad-cli — Command-Line Front-End
//!
//! Drives a [`Workbench`](schemapad_state::Workbench) from files and URLs
//! instead of editor panes. Each subcommand loads buffers, calls the same
//! workbench operation the editor buttons call, and prints the result.
//!
//! ## Subcommands
//!
//! - `schemapad check` — schema status and input status.
//! - `schemapad fmt` — pretty-print a schema or data file.
//! - `schemapad convert` — switch a data file between JSON and YAML.
//! - `schemapad share` — print a share link for a schema file.
//! - `schemapad open` — recover the schema text from a share link.
//! - `schemapad defaults` — print the built-in schema and sample data.
//!
//! Handlers return an exit code: 0 on success, 1 when a document is
//! invalid or an operation did not apply. Operational failures (unreadable
//! files, bad configuration) are returned as errors.

pub mod check;
pub mod config;
pub mod convert;
pub mod defaults;
pub mod fmt;
pub mod share;

use std::path::Path;

use anyhow::{Context, Result};

use schemapad_core::InputFormat;

pub use config::{CliConfig, LogFormat};

/// Read a UTF-8 document.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Write `text` to `path`, or to stdout when `path` is `None`.
pub fn emit_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("cannot write {}", path.display())),
        None => {
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
    }
}

/// Decide the format of a data file.
///
/// An explicit flag wins, then the file extension, then the configured
/// default, then JSON.
pub fn resolve_format(
    explicit: Option<InputFormat>,
    path: &Path,
    config: &CliConfig,
) -> InputFormat {
    explicit
        .or_else(|| InputFormat::from_path(path))
        .or(config.default_format)
        .unwrap_or_default()
}

/// `FAIL:` line for a document that could not be processed.
pub fn failure_line(subject: &str, reason: &dyn std::fmt::Display) -> String {
    format!("FAIL: {subject}: {reason}")
}
