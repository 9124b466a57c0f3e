//! # Defaults Subcommand
//!
//! Prints the schema and sample data a fresh workbench starts with.

use anyhow::Result;
use clap::Args;

use schemapad_core::InputFormat;
use schemapad_state::Workbench;

/// Arguments for `schemapad defaults`.
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Render the sample data in this format.
    #[arg(long, default_value_t = InputFormat::Json)]
    pub format: InputFormat,
}

/// Execute the defaults subcommand.
pub fn run_defaults(args: &DefaultsArgs) -> Result<u8> {
    let mut workbench = Workbench::new();
    workbench.try_set_input_mode(args.format)?;
    println!("# schema");
    println!("{}", workbench.schema_text());
    println!("# data ({})", workbench.input_format());
    print!("{}", workbench.input_text());
    if !workbench.input_text().ends_with('\n') {
        println!();
    }
    Ok(0)
}
