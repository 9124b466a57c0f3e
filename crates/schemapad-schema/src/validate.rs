//! # Schema Compilation & Validation
//!
//! Compiles a JSON Schema document into a reusable [`CompiledSchema`] and
//! runs it against parsed instances.
//!
//! ## Draft Selection
//!
//! By default the draft is detected from the document's `$schema` keyword,
//! falling back to Draft 2020-12. [`CompileSettings::draft`] pins a draft
//! regardless of `$schema`.
//!
//! ## Offline Resolution
//!
//! Compilation never performs network or file access. Internal `$ref`s
//! (`#/definitions/..`, `#/$defs/..`) and the bundled meta-schemas resolve
//! natively; any other `$ref` target fails compilation with a message
//! naming the URI.

use std::fmt;
use std::str::FromStr;

use jsonschema::{Draft, Retrieve, Uri, ValidationOptions, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use schemapad_core::{codec, CodecError};

/// Error while turning schema text into a compiled validator.
///
/// `Display` is the bare underlying message so it can be placed directly in
/// a status list.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema text is not well-formed JSON.
    #[error("{0}")]
    Parse(#[from] CodecError),

    /// The document parsed but is not a usable schema.
    #[error("{reason}")]
    Compile {
        /// Message reported by the schema compiler.
        reason: String,
    },
}

/// JSON Schema drafts that can be pinned at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaDraft {
    #[serde(rename = "draft4")]
    Draft4,
    #[serde(rename = "draft6")]
    Draft6,
    #[serde(rename = "draft7")]
    Draft7,
    #[serde(rename = "2019-09")]
    Draft201909,
    #[serde(rename = "2020-12")]
    Draft202012,
}

impl SchemaDraft {
    fn as_jsonschema(self) -> Draft {
        match self {
            Self::Draft4 => Draft::Draft4,
            Self::Draft6 => Draft::Draft6,
            Self::Draft7 => Draft::Draft7,
            Self::Draft201909 => Draft::Draft201909,
            Self::Draft202012 => Draft::Draft202012,
        }
    }

    /// Identifier used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft4 => "draft4",
            Self::Draft6 => "draft6",
            Self::Draft7 => "draft7",
            Self::Draft201909 => "2019-09",
            Self::Draft202012 => "2020-12",
        }
    }
}

impl fmt::Display for SchemaDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaDraft {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft4" | "4" => Ok(Self::Draft4),
            "draft6" | "6" => Ok(Self::Draft6),
            "draft7" | "7" => Ok(Self::Draft7),
            "2019-09" => Ok(Self::Draft201909),
            "2020-12" => Ok(Self::Draft202012),
            other => Err(format!(
                "unknown draft '{other}' (expected draft4, draft6, draft7, 2019-09 or 2020-12)"
            )),
        }
    }
}

/// Knobs applied when compiling a schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileSettings {
    /// Pin the draft instead of detecting it from `$schema`.
    pub draft: Option<SchemaDraft>,
}

/// Retriever that refuses every external `$ref`.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external $ref '{}' cannot be resolved offline", uri.as_str()).into())
    }
}

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer to the violating location in the instance.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected the instance.
    pub schema_path: String,
    /// Human-readable description from the validator.
    pub message: String,
}

impl Violation {
    /// Schema path as a URI fragment, e.g. `#/properties/foo/type`.
    pub fn schema_fragment(&self) -> String {
        format!("#{}", self.schema_path)
    }
}

/// Renders as `<schemaPath>: <message>`, the form shown in input status.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.schema_fragment(), self.message)
    }
}

/// A compiled, reusable validator together with the schema it came from.
pub struct CompiledSchema {
    schema: Value,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Compile a parsed schema with default settings.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        Self::compile_with(schema, &CompileSettings::default())
    }

    /// Compile a parsed schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the document is not a valid
    /// schema for the selected draft, or references an external resource.
    pub fn compile_with(schema: &Value, settings: &CompileSettings) -> Result<Self, SchemaError> {
        let validator = build_options(settings)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                reason: e.to_string(),
            })?;
        tracing::debug!(draft = ?settings.draft, "compiled schema");
        Ok(Self {
            schema: schema.clone(),
            validator,
        })
    }

    /// Parse schema text as JSON and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] for malformed JSON and
    /// [`SchemaError::Compile`] for a document that is not a usable schema.
    pub fn compile_text(text: &str, settings: &CompileSettings) -> Result<Self, SchemaError> {
        let schema = codec::parse_json(text)?;
        Self::compile_with(&schema, settings)
    }

    /// The schema document this validator was compiled from.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Whether `instance` satisfies the schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// All violations for `instance`, in the order the validator reports
    /// them. Empty when the instance is valid.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

fn build_options(settings: &CompileSettings) -> ValidationOptions {
    let mut opts = jsonschema::options();
    if let Some(draft) = settings.draft {
        opts.with_draft(draft.as_jsonschema());
    }
    opts.with_retriever(OfflineRetriever);
    opts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn foo_schema() -> Value {
        json!({
            "type": "object",
            "required": ["foo"],
            "properties": { "foo": { "type": "integer" } },
            "additionalProperties": false
        })
    }

    #[test]
    fn test_compile_and_accept_valid_instance() {
        let compiled = CompiledSchema::compile(&foo_schema()).unwrap();
        assert!(compiled.is_valid(&json!({"foo": 42})));
        assert!(compiled.violations(&json!({"foo": 42})).is_empty());
    }

    #[test]
    fn test_additional_properties_rejected() {
        let compiled = CompiledSchema::compile(&foo_schema()).unwrap();
        let violations = compiled.violations(&json!({"foo": 42, "bar": "x"}));
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.schema_path.contains("additionalProperties")),
            "Expected an additionalProperties violation, got: {violations:?}"
        );
    }

    #[test]
    fn test_missing_required_reports_root_instance_path() {
        let compiled = CompiledSchema::compile(&foo_schema()).unwrap();
        let violations = compiled.violations(&json!({}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "");
        assert_eq!(violations[0].schema_path, "/required");
        assert!(violations[0].message.contains("foo"));
    }

    #[test]
    fn test_nested_type_error_points_into_schema() {
        let compiled = CompiledSchema::compile(&foo_schema()).unwrap();
        let violations = compiled.violations(&json!({"foo": "nope"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "/foo");
        assert_eq!(violations[0].schema_path, "/properties/foo/type");
    }

    #[test]
    fn test_violation_display_is_fragment_then_message() {
        let v = Violation {
            instance_path: String::new(),
            schema_path: "/additionalProperties".into(),
            message: "Additional properties are not allowed ('bar' was unexpected)".into(),
        };
        assert_eq!(
            v.to_string(),
            "#/additionalProperties: Additional properties are not allowed ('bar' was unexpected)"
        );
    }

    #[test]
    fn test_invalid_keyword_value_fails_compile() {
        let err = CompiledSchema::compile(&json!({"type": 12})).unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_boolean_schemas_compile() {
        let always = CompiledSchema::compile(&json!(true)).unwrap();
        assert!(always.is_valid(&json!({"anything": 1})));
        let never = CompiledSchema::compile(&json!(false)).unwrap();
        assert!(!never.is_valid(&json!(1)));
    }

    #[test]
    fn test_internal_ref_resolves() {
        let schema = json!({
            "$defs": { "id": { "type": "integer" } },
            "properties": { "id": { "$ref": "#/$defs/id" } }
        });
        let compiled = CompiledSchema::compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!({"id": 1})));
        assert!(!compiled.is_valid(&json!({"id": "x"})));
    }

    #[test]
    fn test_external_ref_fails_offline() {
        let schema = json!({ "$ref": "https://example.com/remote.schema.json" });
        let err = CompiledSchema::compile(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
    }

    #[test]
    fn test_compile_text_reports_parse_errors() {
        let err = CompiledSchema::compile_text("{", &CompileSettings::default()).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_pinned_draft4_uses_draft4_semantics() {
        // Draft 4 expresses exclusive bounds as booleans.
        let schema = json!({ "maximum": 10, "exclusiveMaximum": true });
        let settings = CompileSettings {
            draft: Some(SchemaDraft::Draft4),
        };
        let compiled = CompiledSchema::compile_with(&schema, &settings).unwrap();
        assert!(compiled.is_valid(&json!(9)));
        assert!(!compiled.is_valid(&json!(10)));
    }

    #[test]
    fn test_schema_accessor_returns_source() {
        let compiled = CompiledSchema::compile(&foo_schema()).unwrap();
        assert_eq!(compiled.schema(), &foo_schema());
    }

    #[test]
    fn test_draft_parse_and_display() {
        for draft in [
            SchemaDraft::Draft4,
            SchemaDraft::Draft6,
            SchemaDraft::Draft7,
            SchemaDraft::Draft201909,
            SchemaDraft::Draft202012,
        ] {
            assert_eq!(draft.to_string().parse::<SchemaDraft>().unwrap(), draft);
        }
        assert!("draft3".parse::<SchemaDraft>().is_err());
    }

    #[test]
    fn test_draft_deserializes_from_yaml() {
        let draft: SchemaDraft = serde_yaml::from_str("draft7").unwrap();
        assert_eq!(draft, SchemaDraft::Draft7);
    }
}
