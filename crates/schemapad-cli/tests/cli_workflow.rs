//! End-to-end handler flows: author a schema, share it, reopen it, and
//! check data against the reopened copy.

use std::path::{Path, PathBuf};

use schemapad_cli::check::{run_check, CheckArgs};
use schemapad_cli::convert::{run_convert, ConvertArgs};
use schemapad_cli::fmt::{run_fmt, FmtArgs};
use schemapad_cli::share::{run_open, OpenArgs};
use schemapad_cli::CliConfig;
use schemapad_core::InputFormat;
use schemapad_share::{parse_url, url_with_schema_text};

const SCHEMA: &str = r#"{"type":"object","required":["foo"],"properties":{"foo":{"type":"integer"},"bar":{"type":"string"}},"additionalProperties":false}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn check(schema: PathBuf, input: PathBuf) -> u8 {
    let args = CheckArgs {
        schema: Some(schema),
        schema_url: None,
        input: Some(input),
        format: None,
        draft: None,
        json: false,
    };
    run_check(&args, &CliConfig::default()).unwrap()
}

#[test]
fn shared_schema_validates_the_same_as_the_original() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = write(dir.path(), "schema.json", SCHEMA);

    // Format the schema the way the editor button would, then share it.
    let fmt = FmtArgs {
        path: schema_path.clone(),
        schema: true,
        format: None,
        write: true,
    };
    assert_eq!(run_fmt(&fmt, &CliConfig::default()).unwrap(), 0);
    let formatted = std::fs::read_to_string(&schema_path).unwrap();

    let base = parse_url("https://schemapad.example/#/").unwrap();
    let link = url_with_schema_text(&base, &formatted);

    let reopened = dir.path().join("reopened.json");
    let open = OpenArgs {
        url: link.to_string(),
        out: Some(reopened.clone()),
    };
    assert_eq!(run_open(&open).unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&reopened).unwrap(), formatted);

    let good = write(dir.path(), "good.json", r#"{"foo": 42, "bar": "Hello, World!"}"#);
    let bad = write(dir.path(), "bad.json", r#"{"foo": 42, "baz": true}"#);
    assert_eq!(check(schema_path.clone(), good.clone()), 0);
    assert_eq!(check(reopened.clone(), good), 0);
    assert_eq!(check(schema_path, bad.clone()), 1);
    assert_eq!(check(reopened, bad), 1);
}

#[test]
fn converted_data_keeps_its_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = write(dir.path(), "schema.json", SCHEMA);
    let json_data = write(dir.path(), "data.json", r#"{"foo": 7}"#);
    let yaml_data = dir.path().join("data.yaml");

    let convert = ConvertArgs {
        path: json_data.clone(),
        to: InputFormat::Yaml,
        from: None,
        out: Some(yaml_data.clone()),
    };
    assert_eq!(run_convert(&convert, &CliConfig::default()).unwrap(), 0);

    assert_eq!(check(schema_path.clone(), json_data), 0);
    assert_eq!(check(schema_path, yaml_data), 0);
}

#[test]
fn broken_schema_fails_every_input() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = write(dir.path(), "schema.json", r#"{"type": "#);
    let data = write(dir.path(), "data.json", r#"{"foo": 1}"#);
    assert_eq!(check(schema_path, data), 1);
}
