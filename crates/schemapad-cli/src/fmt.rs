//! # Fmt Subcommand
//!
//! Pretty-prints a document the way the editor's Format buttons do: schema
//! files as two-space JSON, data files in their own format.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use schemapad_core::InputFormat;
use schemapad_state::Workbench;

use crate::{emit_text, failure_line, read_text, resolve_format, CliConfig};

/// Arguments for `schemapad fmt`.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to format.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Treat the file as a JSON Schema (always JSON).
    #[arg(long, conflicts_with = "format")]
    pub schema: bool,

    /// Format of a data file (default: from extension).
    #[arg(long)]
    pub format: Option<InputFormat>,

    /// Rewrite the file in place instead of printing.
    #[arg(long, short = 'w')]
    pub write: bool,
}

/// Execute the fmt subcommand.
///
/// Returns 1 without touching the file when it does not parse.
pub fn run_fmt(args: &FmtArgs, config: &CliConfig) -> Result<u8> {
    let text = read_text(&args.path)?;

    let (result, formatted) = if args.schema {
        let mut workbench = Workbench::new();
        workbench.set_schema_text(text);
        let result = workbench.try_format_schema_text();
        (result, workbench.schema_text().to_string())
    } else {
        let format = resolve_format(args.format, &args.path, config);
        let mut workbench = Workbench::with_texts(String::new(), text, format);
        let result = workbench.try_format_input_text();
        (result, workbench.input_text().to_string())
    };

    if let Err(e) = result {
        println!("{}", failure_line(&args.path.display().to_string(), &e));
        return Ok(1);
    }

    let out = args.write.then_some(args.path.as_path());
    emit_text(out, &formatted)?;
    if args.write {
        tracing::info!(path = %args.path.display(), "formatted in place");
    }
    Ok(0)
}
