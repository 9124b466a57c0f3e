//! # Check Subcommand
//!
//! Prints schema status and, when a data file is given, input status.
//!
//! ```bash
//! schemapad check --schema schema.json --input data.yaml
//! schemapad check --schema-url 'https://…/?schemaText=N4Ig…' --input data.json --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;

use schemapad_core::InputFormat;
use schemapad_schema::{CompileSettings, SchemaDraft};
use schemapad_share::{parse_url, schema_text_from_url};
use schemapad_state::{InputStatus, SchemaStatus, Workbench};

use crate::{read_text, resolve_format, CliConfig};

/// Arguments for `schemapad check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON Schema file.
    #[arg(long, value_name = "FILE", required_unless_present = "schema_url", conflicts_with = "schema_url")]
    pub schema: Option<PathBuf>,

    /// Share link carrying the schema text.
    #[arg(long, value_name = "URL")]
    pub schema_url: Option<String>,

    /// Data file to validate against the schema.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Format of the data file (default: from extension).
    #[arg(long)]
    pub format: Option<InputFormat>,

    /// Pin the JSON Schema draft instead of reading `$schema`.
    #[arg(long)]
    pub draft: Option<SchemaDraft>,

    /// Emit a JSON report instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    schema: SchemaStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<InputStatus>,
}

impl CheckReport {
    fn is_valid(&self) -> bool {
        self.schema.is_valid && self.input.as_ref().map_or(true, |i| i.is_valid)
    }
}

/// Execute the check subcommand.
///
/// Returns 0 when every checked document is valid, 1 otherwise.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let workbench = load_workbench(args, config)?;

    let report = match args.input {
        Some(_) => {
            let status = workbench.status();
            CheckReport {
                schema: status.schema,
                input: Some(status.input),
            }
        }
        None => CheckReport {
            schema: workbench.schema_status(),
            input: None,
        },
    };

    tracing::info!(
        schema_valid = report.schema.is_valid,
        input_valid = report.input.as_ref().map(|i| i.is_valid),
        "check finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_status("schema", args.schema.as_deref(), report.schema.is_valid, &report.schema.errors);
        if let Some(input) = &report.input {
            print_status("input", args.input.as_deref(), input.is_valid, &input.errors);
        }
    }

    Ok(if report.is_valid() { 0 } else { 1 })
}

fn load_workbench(args: &CheckArgs, config: &CliConfig) -> Result<Workbench> {
    let schema_text = match (&args.schema, &args.schema_url) {
        (Some(path), _) => read_text(path)?,
        (None, Some(url)) => {
            let url = parse_url(url)?;
            schema_text_from_url(&url)
                .context("cannot decode share link")?
                .ok_or_else(|| anyhow!("share link has no schemaText parameter"))?
        }
        (None, None) => return Err(anyhow!("either --schema or --schema-url is required")),
    };

    let (input_text, format) = match &args.input {
        Some(path) => (read_text(path)?, resolve_format(args.format, path, config)),
        None => (String::new(), args.format.unwrap_or_default()),
    };

    let settings = CompileSettings {
        draft: args.draft.or(config.draft),
    };
    Ok(Workbench::with_texts(schema_text, input_text, format).with_settings(settings))
}

fn print_status(label: &str, path: Option<&Path>, is_valid: bool, errors: &[String]) {
    let target = match path {
        Some(path) => format!("{label} ({})", path.display()),
        None => label.to_string(),
    };
    if is_valid {
        println!("OK: {target}");
    } else {
        println!("FAIL: {target}");
        for error in errors {
            println!("  - {error}");
        }
    }
}
