//! # Page Location
//!
//! The schema buffer is shared by rewriting the current page's query string
//! in place: the `schemaText` parameter carries a share token, every other
//! parameter and the fragment are left alone, and nothing is reloaded.
//!
//! [`Location`] is the seam between the workbench and whatever owns the
//! address bar. [`MemoryLocation`] keeps the history in memory and is what
//! the CLI and the tests use.

use url::Url;

use crate::error::ShareError;
use crate::token::{decode_share_token, encode_share_token};

/// Query parameter holding the share token.
pub const SCHEMA_TEXT_PARAM: &str = "schemaText";

/// Access to the current page address and its history.
pub trait Location {
    /// The current page URL.
    fn href(&self) -> &Url;

    /// Make `url` the current entry without navigating.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::HistoryRejected`] if the location refuses the
    /// entry.
    fn push_state(&mut self, url: Url) -> Result<(), ShareError>;
}

/// In-memory history, newest entry last.
///
/// Like a browser, it only accepts entries with the same origin as the
/// current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    entries: Vec<Url>,
}

impl MemoryLocation {
    /// Start a history at `url`.
    pub fn new(url: Url) -> Self {
        Self { entries: vec![url] }
    }

    /// Start a history at the parsed `url`.
    pub fn parse(url: &str) -> Result<Self, ShareError> {
        Ok(Self::new(parse_url(url)?))
    }

    /// Every entry, oldest first. Never empty.
    pub fn entries(&self) -> &[Url] {
        &self.entries
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> &Url {
        // `entries` is created non-empty and only ever grows.
        &self.entries[self.entries.len() - 1]
    }

    fn push_state(&mut self, url: Url) -> Result<(), ShareError> {
        let current = self.href();
        if !same_origin(current, &url) {
            return Err(ShareError::HistoryRejected(format!(
                "'{url}' is not same-origin with '{current}'"
            )));
        }
        tracing::debug!(%url, "pushed history entry");
        self.entries.push(url);
        Ok(())
    }
}

/// Whether a history entry for `next` may replace `current`.
///
/// Opaque origins (`file:`, `data:`, custom schemes) never compare equal,
/// so those pages may only rewrite the query and fragment of their own
/// document.
fn same_origin(current: &Url, next: &Url) -> bool {
    let origin = current.origin();
    if origin.is_tuple() {
        return origin == next.origin();
    }
    current.scheme() == next.scheme()
        && current.host_str() == next.host_str()
        && current.path() == next.path()
}

/// Parse a page URL.
pub fn parse_url(url: &str) -> Result<Url, ShareError> {
    Url::parse(url).map_err(|e| ShareError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Read the schema text carried by `url`, if any.
///
/// Returns `Ok(None)` when the parameter is absent or empty. The first
/// occurrence wins when the parameter is repeated.
///
/// # Errors
///
/// Propagates token decoding failures.
pub fn schema_text_from_url(url: &Url) -> Result<Option<String>, ShareError> {
    let token = url
        .query_pairs()
        .find(|(k, _)| k == SCHEMA_TEXT_PARAM)
        .map(|(_, v)| v.into_owned());
    match token {
        Some(token) if !token.is_empty() => decode_share_token(&token).map(Some),
        _ => Ok(None),
    }
}

/// `url` with its share parameter set to the token for `schema_text`.
///
/// The first existing `schemaText` pair is replaced in position and any
/// later duplicates are dropped; other pairs keep their order. Path and
/// fragment are untouched.
pub fn url_with_schema_text(url: &Url, schema_text: &str) -> Url {
    let token = encode_share_token(schema_text);
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (k, v) in url.query_pairs() {
        if k == SCHEMA_TEXT_PARAM {
            if !replaced {
                pairs.push((k.into_owned(), token.clone()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((SCHEMA_TEXT_PARAM.to_string(), token));
    }

    let mut out = url.clone();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out
}

/// Rewrite `location`'s current URL to carry `schema_text`.
///
/// Returns the new current URL.
pub fn publish_schema_text(
    location: &mut impl Location,
    schema_text: &str,
) -> Result<Url, ShareError> {
    let url = url_with_schema_text(location.href(), schema_text);
    location.push_state(url.clone())?;
    Ok(url)
}
