//! # JSON / YAML Codec
//!
//! Parses buffer text into a `serde_json::Value` and renders values back to
//! text. Every buffer operation (status derivation, format, mode switch)
//! goes through this module so that both buffers share one notion of
//! "well-formed".
//!
//! YAML documents are converted into the JSON data model after parsing.
//! YAML tags are dropped, scalar map keys are stringified, and values JSON
//! cannot express are rejected with [`CodecError::Unrepresentable`].

use serde_json::Value;

use crate::error::CodecError;
use crate::format::InputFormat;

/// Parse `text` according to `format`.
pub fn parse(text: &str, format: InputFormat) -> Result<Value, CodecError> {
    match format {
        InputFormat::Json => parse_json(text),
        InputFormat::Yaml => parse_yaml(text),
    }
}

/// Parse JSON text.
pub fn parse_json(text: &str) -> Result<Value, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse YAML text and convert it to the JSON data model.
pub fn parse_yaml(text: &str) -> Result<Value, CodecError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    yaml_to_json_value(&yaml)
}

/// Render `value` as text in `format`.
///
/// JSON is pretty-printed with two-space indentation and no trailing
/// newline. YAML uses the `serde_yaml` emitter defaults, which end the
/// document with a newline.
pub fn to_text(value: &Value, format: InputFormat) -> Result<String, CodecError> {
    match format {
        InputFormat::Json => pretty_json(value),
        InputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

/// Pretty-print a value as JSON with two-space indentation.
pub fn pretty_json(value: &Value) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse `text` as `format` and re-render it canonically in the same format.
pub fn reformat(text: &str, format: InputFormat) -> Result<String, CodecError> {
    convert(text, format, format)
}

/// Parse `text` as `from` and render the parsed value as `to`.
pub fn convert(text: &str, from: InputFormat, to: InputFormat) -> Result<String, CodecError> {
    let value = parse(text, from)?;
    to_text(&value, to)
}

fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, CodecError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => yaml_number_to_json(n),
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => {
                        return Err(CodecError::Unrepresentable(format!(
                            "unsupported YAML map key: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        // Tags carry no meaning in the JSON data model.
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> Result<Value, CodecError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else if let Some(f) = n.as_f64() {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| CodecError::Unrepresentable(format!("cannot represent float {f} in JSON")))
    } else {
        Err(CodecError::Unrepresentable(format!(
            "unsupported YAML number: {n}"
        )))
    }
}
