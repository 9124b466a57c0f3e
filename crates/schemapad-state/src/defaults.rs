//! Built-in buffer contents used when nothing else seeds the workbench.

/// Default schema: an object requiring integer `foo`, allowing string `bar`,
/// and rejecting any other property.
pub const DEFAULT_SCHEMA_TEXT: &str = r#"{
  "type": "object",
  "properties": {
    "foo": {
      "type": "integer"
    },
    "bar": {
      "type": "string"
    }
  },
  "required": [
    "foo"
  ],
  "additionalProperties": false
}"#;

/// Default sample data, valid against [`DEFAULT_SCHEMA_TEXT`].
pub const DEFAULT_INPUT_TEXT: &str = r#"{
  "foo": 42,
  "bar": "Hello, World!"
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use schemapad_core::{codec, InputFormat};

    #[test]
    fn defaults_are_already_canonical() {
        assert_eq!(
            codec::reformat(DEFAULT_SCHEMA_TEXT, InputFormat::Json).unwrap(),
            DEFAULT_SCHEMA_TEXT
        );
        assert_eq!(
            codec::reformat(DEFAULT_INPUT_TEXT, InputFormat::Json).unwrap(),
            DEFAULT_INPUT_TEXT
        );
    }

    #[test]
    fn default_schema_shape() {
        let schema = codec::parse_json(DEFAULT_SCHEMA_TEXT).unwrap();
        assert_eq!(schema["required"], serde_json::json!(["foo"]));
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["properties"]["foo"]["type"], "integer");
        assert_eq!(schema["properties"]["bar"]["type"], "string");
    }
}
