//! # schemapad CLI entry point
//!
//! Parses command-line arguments, loads configuration, installs logging and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schemapad_cli::check::{run_check, CheckArgs};
use schemapad_cli::convert::{run_convert, ConvertArgs};
use schemapad_cli::defaults::{run_defaults, DefaultsArgs};
use schemapad_cli::fmt::{run_fmt, FmtArgs};
use schemapad_cli::share::{run_open, run_share, OpenArgs, ShareArgs};
use schemapad_cli::{CliConfig, LogFormat};

/// schemapad — JSON Schema workbench.
///
/// Checks a JSON Schema and sample data (JSON or YAML), pretty-prints and
/// converts documents, and creates or opens share links.
#[derive(Parser, Debug)]
#[command(name = "schemapad", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./schemapad.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format (overrides the config file).
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report schema status and, optionally, input status.
    Check(CheckArgs),

    /// Pretty-print a schema or data file.
    Fmt(FmtArgs),

    /// Convert a data file between JSON and YAML.
    Convert(ConvertArgs),

    /// Print a share link for a schema file.
    Share(ShareArgs),

    /// Print the schema carried by a share link.
    Open(OpenArgs),

    /// Print the built-in default schema and sample data.
    Defaults(DefaultsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = CliConfig::load(cli.config.as_deref(), &cwd);

    let log_format = cli
        .log_format
        .or_else(|| config.as_ref().ok().map(|c| c.log_format))
        .unwrap_or_default();
    init_tracing(cli.verbose, log_format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Fmt(args) => run_fmt(&args, &config),
        Commands::Convert(args) => run_convert(&args, &config),
        Commands::Share(args) => run_share(&args, &config),
        Commands::Open(args) => run_open(&args),
        Commands::Defaults(args) => run_defaults(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Install the global subscriber.
///
/// Without `-v`, `RUST_LOG` is honoured if set, else only warnings show.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
