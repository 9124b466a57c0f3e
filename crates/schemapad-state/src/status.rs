//! # Derived Status
//!
//! Read-only projections of the buffers. Built fresh by every status read
//! on [`Workbench`](crate::Workbench); nothing here is cached.

use serde::Serialize;

use schemapad_schema::CompiledSchema;

/// Schema buffer is the empty string.
pub const SCHEMA_EMPTY: &str = "Schema is empty";
/// Reported for the input whenever the schema does not compile.
pub const SCHEMA_INVALID: &str = "Schema is invalid";
/// Input buffer is the empty string.
pub const INPUT_EMPTY: &str = "Input is empty";

/// Status of the schema buffer.
///
/// When valid, `validator` holds the compiled schema; it lives as long as
/// this status value.
#[derive(Debug, Serialize)]
pub struct SchemaStatus {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip)]
    pub validator: Option<CompiledSchema>,
}

impl SchemaStatus {
    pub(crate) fn valid(validator: CompiledSchema) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            validator: Some(validator),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
            validator: None,
        }
    }
}

/// Status of the input buffer against the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputStatus {
    pub is_valid: bool,
    /// `"<schemaPath>: <message>"` per violation in validator order, or a
    /// single parse/schema message.
    pub errors: Vec<String>,
}

impl InputStatus {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
        }
    }
}

/// Both statuses computed from a single schema compilation.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub schema: SchemaStatus,
    pub input: InputStatus,
}

impl StatusReport {
    /// True when both buffers are valid.
    pub fn is_valid(&self) -> bool {
        self.schema.is_valid && self.input.is_valid
    }
}
