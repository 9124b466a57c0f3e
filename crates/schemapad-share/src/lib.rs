//! # schemapad-share — Share Links
//!
//! A schema is shared as a URL whose `schemaText` query parameter holds the
//! lz-string compressed schema text. Opening that URL seeds the schema
//! buffer with the exact original text.
//!
//! - [`token`] — compress/decompress the schema text.
//! - [`location`] — the [`Location`] seam, [`MemoryLocation`], and the
//!   helpers that read and rewrite the share parameter.

pub mod error;
pub mod location;
pub mod token;

pub use error::ShareError;
pub use location::{
    parse_url, publish_schema_text, schema_text_from_url, url_with_schema_text, Location,
    MemoryLocation, SCHEMA_TEXT_PARAM,
};
pub use token::{decode_share_token, encode_share_token, TOKEN_ALPHABET};

pub use url::Url;
