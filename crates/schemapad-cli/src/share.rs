//! # Share & Open Subcommands
//!
//! `share` turns a schema file into a link; `open` turns a link back into
//! schema text. Links interoperate with the browser build.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use schemapad_share::{parse_url, schema_text_from_url, MemoryLocation};
use schemapad_state::{Workbench, DEFAULT_SCHEMA_TEXT};

use crate::{emit_text, read_text, CliConfig};

/// Arguments for `schemapad share`.
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// JSON Schema file to share.
    #[arg(value_name = "FILE")]
    pub schema: PathBuf,

    /// Page URL to rewrite (default: `share_base_url` from config).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

/// Arguments for `schemapad open`.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Share link.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Write the schema here instead of printing it.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Execute the share subcommand: print the share link.
pub fn run_share(args: &ShareArgs, config: &CliConfig) -> Result<u8> {
    let schema_text = read_text(&args.schema)?;
    let base = match &args.url {
        Some(url) => parse_url(url)?,
        None => config.share_base_url()?,
    };

    let mut workbench = Workbench::new();
    workbench.set_schema_text(schema_text);
    if !workbench.schema_status().is_valid {
        tracing::warn!(path = %args.schema.display(), "sharing a schema that does not compile");
    }

    let mut location = MemoryLocation::new(base);
    let url = workbench
        .try_share_schema(&mut location)
        .context("cannot build share link")?;
    println!("{url}");
    Ok(0)
}

/// Execute the open subcommand: print the schema carried by a link.
///
/// A link without a share parameter opens the default schema, as a page
/// load would.
pub fn run_open(args: &OpenArgs) -> Result<u8> {
    let url = parse_url(&args.url)?;
    let schema_text = match schema_text_from_url(&url).context("cannot decode share link")? {
        Some(text) => text,
        None => {
            tracing::info!("link carries no schema, using the default schema");
            DEFAULT_SCHEMA_TEXT.to_string()
        }
    };
    emit_text(args.out.as_deref(), &schema_text)?;
    Ok(0)
}
