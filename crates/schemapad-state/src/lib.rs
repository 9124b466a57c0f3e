//! # schemapad-state — The Validation Workbench
//!
//! [`Workbench`] owns the two editable buffers and derives their status on
//! demand. It is constructed explicitly and handed to whichever front-end
//! drives it; there is no shared global instance.
//!
//! ## Status Rules
//!
//! - Schema: empty → [`SCHEMA_EMPTY`]; malformed JSON or a document the
//!   compiler rejects → that message; otherwise valid with a compiled
//!   validator.
//! - Input: unusable schema → [`SCHEMA_INVALID`]; empty → [`INPUT_EMPTY`];
//!   malformed in the current format → parser message; otherwise one
//!   `"<schemaPath>: <message>"` line per violation.
//!
//! Status reads never fail and never cache.

pub mod defaults;
pub mod error;
pub mod status;
pub mod workbench;

pub use defaults::{DEFAULT_INPUT_TEXT, DEFAULT_SCHEMA_TEXT};
pub use error::WorkbenchError;
pub use status::{InputStatus, SchemaStatus, StatusReport, INPUT_EMPTY, SCHEMA_EMPTY, SCHEMA_INVALID};
pub use workbench::Workbench;
