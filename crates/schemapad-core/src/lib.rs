//! # schemapad-core — Foundational Types for schemapad
//!
//! Shared by every other crate in the workspace; depends on nothing
//! internal.
//!
//! - [`InputFormat`] — JSON or YAML, the serialization of the input buffer.
//! - [`codec`] — parse buffer text into `serde_json::Value` and render it
//!   back. JSON output is two-space pretty-printed with key order preserved.
//! - [`CodecError`] — parse/serialize failures whose `Display` is the raw
//!   parser message, ready to be shown in a status panel.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemapad-*` crates.
//! - No I/O. Callers own files, URLs and terminals.
//! - No `.unwrap()` outside tests.

pub mod codec;
pub mod error;
pub mod format;

pub use error::CodecError;
pub use format::{InputFormat, UnknownFormat};
