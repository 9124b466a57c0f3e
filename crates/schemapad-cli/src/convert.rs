//! # Convert Subcommand
//!
//! Switches a data file between JSON and YAML, the same way the editor's
//! format picker re-renders the input buffer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use schemapad_core::InputFormat;
use schemapad_state::Workbench;

use crate::{emit_text, failure_line, read_text, resolve_format, CliConfig};

/// Arguments for `schemapad convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Data file to convert.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Target format.
    #[arg(long)]
    pub to: InputFormat,

    /// Source format (default: from extension).
    #[arg(long)]
    pub from: Option<InputFormat>,

    /// Write the result here instead of printing it.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Execute the convert subcommand.
///
/// Returns 1 when the file does not parse in its source format.
pub fn run_convert(args: &ConvertArgs, config: &CliConfig) -> Result<u8> {
    let text = read_text(&args.path)?;
    let from = resolve_format(args.from, &args.path, config);

    let mut workbench = Workbench::with_texts(String::new(), text, from);
    if let Err(e) = workbench.try_set_input_mode(args.to) {
        let subject = format!("{} is not valid {from}", args.path.display());
        println!("{}", failure_line(&subject, &e));
        return Ok(1);
    }

    tracing::debug!(%from, to = %args.to, "converted");
    emit_text(args.out.as_deref(), workbench.input_text())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemapad_core::codec;

    #[test]
    fn json_to_yaml_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("data.json");
        let yaml_path = dir.path().join("data.yaml");
        let back_path = dir.path().join("back.json");
        std::fs::write(&json_path, r#"{"foo": 42, "list": [1, "two", null]}"#).unwrap();

        let to_yaml = ConvertArgs {
            path: json_path.clone(),
            to: InputFormat::Yaml,
            from: None,
            out: Some(yaml_path.clone()),
        };
        assert_eq!(run_convert(&to_yaml, &CliConfig::default()).unwrap(), 0);

        let to_json = ConvertArgs {
            path: yaml_path,
            to: InputFormat::Json,
            from: None,
            out: Some(back_path.clone()),
        };
        assert_eq!(run_convert(&to_json, &CliConfig::default()).unwrap(), 0);

        let original = codec::parse_json(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        let back = codec::parse_json(&std::fs::read_to_string(&back_path).unwrap()).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn source_format_flag_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let out = dir.path().join("out.json");
        std::fs::write(&path, "foo: bar\n").unwrap();
        let args = ConvertArgs {
            path,
            to: InputFormat::Json,
            from: Some(InputFormat::Yaml),
            out: Some(out.clone()),
        };
        assert_eq!(run_convert(&args, &CliConfig::default()).unwrap(), 0);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "{\n  \"foo\": \"bar\"\n}"
        );
    }

    #[test]
    fn unparseable_source_returns_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let out = dir.path().join("out.yaml");
        std::fs::write(&path, "{nope").unwrap();
        let args = ConvertArgs {
            path,
            to: InputFormat::Yaml,
            from: None,
            out: Some(out.clone()),
        };
        assert_eq!(run_convert(&args, &CliConfig::default()).unwrap(), 1);
        assert!(!out.exists());
    }
}
