//! # Workbench
//!
//! Holds the schema buffer, the input buffer and the input format. Status
//! is pulled, not pushed: [`Workbench::schema_status`] and
//! [`Workbench::input_status`] parse and compile the current text on every
//! call, so a read after any edit always reflects that edit.
//!
//! Mutations come in two flavours:
//!
//! - Buffer edits (`set_schema_text`, `set_input_text`) always apply and
//!   never validate.
//! - Reformatting, mode switches and sharing are best-effort. The plain
//!   methods log a warning and leave state untouched on failure; the
//!   `try_` variants return the error so a front-end can show it.

use schemapad_core::{codec, InputFormat};
use schemapad_schema::{CompileSettings, CompiledSchema};
use schemapad_share::{publish_schema_text, schema_text_from_url, Location, Url};

use crate::defaults::{DEFAULT_INPUT_TEXT, DEFAULT_SCHEMA_TEXT};
use crate::error::WorkbenchError;
use crate::status::{
    InputStatus, SchemaStatus, StatusReport, INPUT_EMPTY, SCHEMA_EMPTY, SCHEMA_INVALID,
};

/// Schema and input buffers with derived validation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench {
    schema_text: String,
    input_text: String,
    input_format: InputFormat,
    settings: CompileSettings,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    /// Default schema, default sample data, JSON input.
    pub fn new() -> Self {
        Self::with_texts(DEFAULT_SCHEMA_TEXT, DEFAULT_INPUT_TEXT, InputFormat::Json)
    }

    /// Start from explicit buffer contents.
    pub fn with_texts(
        schema_text: impl Into<String>,
        input_text: impl Into<String>,
        input_format: InputFormat,
    ) -> Self {
        Self {
            schema_text: schema_text.into(),
            input_text: input_text.into(),
            input_format,
            settings: CompileSettings::default(),
        }
    }

    /// Start from a page location.
    ///
    /// The schema buffer is taken from the location's share parameter.
    /// When the parameter is missing, or fails to decode, the default
    /// schema is used; a decode failure is only logged.
    pub fn from_location(location: &impl Location) -> Self {
        let mut workbench = Self::new();
        match schema_text_from_url(location.href()) {
            Ok(Some(text)) => workbench.schema_text = text,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "ignoring undecodable share link, using default schema");
            }
        }
        workbench
    }

    /// Replace the compile settings used by status reads.
    pub fn with_settings(mut self, settings: CompileSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn schema_text(&self) -> &str {
        &self.schema_text
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }

    pub fn settings(&self) -> &CompileSettings {
        &self.settings
    }

    /// Replace the schema buffer verbatim.
    pub fn set_schema_text(&mut self, text: impl Into<String>) {
        self.schema_text = text.into();
        tracing::debug!(len = self.schema_text.len(), "schema text replaced");
    }

    /// Replace the input buffer verbatim.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        tracing::debug!(len = self.input_text.len(), "input text replaced");
    }

    /// Parse and compile the schema buffer.
    pub fn schema_status(&self) -> SchemaStatus {
        if self.schema_text.is_empty() {
            return SchemaStatus::invalid(SCHEMA_EMPTY);
        }
        match CompiledSchema::compile_text(&self.schema_text, &self.settings) {
            Ok(compiled) => SchemaStatus::valid(compiled),
            Err(e) => {
                tracing::debug!(error = %e, "schema status invalid");
                SchemaStatus::invalid(e.to_string())
            }
        }
    }

    /// Validate the input buffer against the schema buffer.
    ///
    /// An unusable schema short-circuits to [`SCHEMA_INVALID`] before the
    /// input is looked at.
    pub fn input_status(&self) -> InputStatus {
        self.input_status_against(&self.schema_status())
    }

    /// Schema and input status from one compilation.
    pub fn status(&self) -> StatusReport {
        let schema = self.schema_status();
        let input = self.input_status_against(&schema);
        StatusReport { schema, input }
    }

    fn input_status_against(&self, schema: &SchemaStatus) -> InputStatus {
        let Some(validator) = schema.validator.as_ref().filter(|_| schema.is_valid) else {
            return InputStatus::invalid(SCHEMA_INVALID);
        };
        if self.input_text.is_empty() {
            return InputStatus::invalid(INPUT_EMPTY);
        }
        let data = match codec::parse(&self.input_text, self.input_format) {
            Ok(data) => data,
            Err(e) => return InputStatus::invalid(e.to_string()),
        };
        let errors: Vec<String> = validator
            .violations(&data)
            .iter()
            .map(ToString::to_string)
            .collect();
        InputStatus {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Switch the input format, re-rendering the input buffer.
    ///
    /// # Errors
    ///
    /// Returns the codec error if the buffer does not parse in the current
    /// format; text and format are left unchanged.
    pub fn try_set_input_mode(&mut self, mode: InputFormat) -> Result<(), WorkbenchError> {
        let text = codec::convert(&self.input_text, self.input_format, mode)?;
        tracing::debug!(from = %self.input_format, to = %mode, "input format switched");
        self.input_text = text;
        self.input_format = mode;
        Ok(())
    }

    /// Best-effort [`try_set_input_mode`](Self::try_set_input_mode).
    pub fn set_input_mode(&mut self, mode: InputFormat) {
        if let Err(e) = self.try_set_input_mode(mode) {
            tracing::warn!(error = %e, from = %self.input_format, to = %mode, "input format not switched");
        }
    }

    /// Pretty-print the schema buffer as two-space indented JSON.
    pub fn try_format_schema_text(&mut self) -> Result<(), WorkbenchError> {
        self.schema_text = codec::reformat(&self.schema_text, InputFormat::Json)?;
        Ok(())
    }

    /// Best-effort [`try_format_schema_text`](Self::try_format_schema_text).
    pub fn format_schema_text(&mut self) {
        if let Err(e) = self.try_format_schema_text() {
            tracing::warn!(error = %e, "schema text not formatted");
        }
    }

    /// Re-render the input buffer canonically in its current format.
    pub fn try_format_input_text(&mut self) -> Result<(), WorkbenchError> {
        self.input_text = codec::reformat(&self.input_text, self.input_format)?;
        Ok(())
    }

    /// Best-effort [`try_format_input_text`](Self::try_format_input_text).
    pub fn format_input_text(&mut self) {
        if let Err(e) = self.try_format_input_text() {
            tracing::warn!(error = %e, format = %self.input_format, "input text not formatted");
        }
    }

    /// Put the schema buffer into `location`'s query string.
    ///
    /// Returns the URL now current in `location`.
    pub fn try_share_schema(&self, location: &mut impl Location) -> Result<Url, WorkbenchError> {
        Ok(publish_schema_text(location, &self.schema_text)?)
    }

    /// Best-effort [`try_share_schema`](Self::try_share_schema).
    pub fn share_schema(&self, location: &mut impl Location) {
        match self.try_share_schema(location) {
            Ok(url) => tracing::info!(%url, "schema shared"),
            Err(e) => tracing::warn!(error = %e, "schema not shared"),
        }
    }
}
