//! Errors from the fallible workbench operations.

use thiserror::Error;

use schemapad_core::CodecError;
use schemapad_share::ShareError;

/// Why a format, mode switch or share did not apply.
#[derive(Error, Debug)]
pub enum WorkbenchError {
    /// The buffer could not be parsed or re-rendered.
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// The share link could not be published.
    #[error("{0}")]
    Share(#[from] ShareError),
}
