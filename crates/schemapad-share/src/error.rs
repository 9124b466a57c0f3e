//! Share-link errors.

use thiserror::Error;

/// Error while encoding, decoding or publishing a share link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The query parameter was present but empty.
    #[error("share token is empty")]
    EmptyToken,

    /// The token is not lz-string URI-component output.
    #[error("malformed share token: {0}")]
    MalformedToken(String),

    /// The token decompressed to something that is not text.
    #[error("share token does not contain valid text: {0}")]
    InvalidText(String),

    /// A page URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The location refused a history update.
    #[error("history update rejected: {0}")]
    HistoryRejected(String),
}
