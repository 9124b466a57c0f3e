//! # schemapad-schema — Schema Compilation & Validation
//!
//! Wraps the `jsonschema` crate behind a small surface:
//!
//! - [`CompiledSchema::compile_text`] — parse and compile schema text.
//! - [`CompiledSchema::violations`] — run the validator, returning
//!   [`Violation`]s in validator order. `Violation`'s `Display` is the
//!   `"<schemaPath>: <message>"` line shown in input status.
//!
//! Compilation is offline: external `$ref`s fail instead of being fetched.

pub mod validate;

pub use validate::{CompileSettings, CompiledSchema, SchemaDraft, SchemaError, Violation};
