//! # Share Tokens
//!
//! Schema text is compressed with the lz-string algorithm and encoded with
//! its URI-component alphabet (`A-Z a-z 0-9 + - $`). Tokens are therefore
//! interchangeable with links produced by the browser build of the tool.

use crate::error::ShareError;

/// Alphabet of `compressToEncodedURIComponent` output.
pub const TOKEN_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$";

/// Compress `text` into a URL-safe share token.
pub fn encode_share_token(text: &str) -> String {
    lz_str::compress_to_encoded_uri_component(text)
}

/// Decompress a share token back into the original text.
///
/// # Errors
///
/// - [`ShareError::EmptyToken`] for an empty token.
/// - [`ShareError::MalformedToken`] if the token uses characters outside
///   [`TOKEN_ALPHABET`] or does not decompress.
/// - [`ShareError::InvalidText`] if the payload is not valid UTF-16.
pub fn decode_share_token(token: &str) -> Result<String, ShareError> {
    if token.is_empty() {
        return Err(ShareError::EmptyToken);
    }
    if let Some(bad) = token.chars().find(|c| !TOKEN_ALPHABET.contains(*c)) {
        return Err(ShareError::MalformedToken(format!(
            "unexpected character '{bad}'"
        )));
    }
    let units = lz_str::decompress_from_encoded_uri_component(token)
        .ok_or_else(|| ShareError::MalformedToken("token does not decompress".into()))?;
    String::from_utf16(&units).map_err(|e| ShareError::InvalidText(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_uses_url_safe_alphabet() {
        let token = encode_share_token("{\n  \"type\": \"object\"\n}");
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| TOKEN_ALPHABET.contains(c)), "{token}");
    }

    #[test]
    fn round_trips_schema_text() {
        let text = "{\n  \"type\": \"object\",\n  \"required\": [\"foo\"]\n}";
        assert_eq!(decode_share_token(&encode_share_token(text)).unwrap(), text);
    }

    #[test]
    fn round_trips_non_ascii() {
        let text = r#"{"description": "Grüße — 日本語 🚀"}"#;
        assert_eq!(decode_share_token(&encode_share_token(text)).unwrap(), text);
    }

    #[test]
    fn compresses_repetitive_text() {
        let text = "\"aaaaaaaa\", ".repeat(200);
        assert!(encode_share_token(&text).len() < text.len() / 4);
    }

    #[test]
    fn empty_text_has_a_non_empty_token() {
        let token = encode_share_token("");
        assert_eq!(token, "Q");
        assert_eq!(decode_share_token(&token).unwrap(), "");
    }

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(
            decode_share_token(""),
            Err(ShareError::EmptyToken)
        ));
    }

    #[test]
    fn rejects_foreign_characters() {
        let err = decode_share_token("abc%20def").unwrap_err();
        assert!(matches!(err, ShareError::MalformedToken(_)));
        assert!(err.to_string().contains('%'));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding an encoded token reproduces the text exactly.
        #[test]
        fn encode_decode_round_trip(text in "\\PC{1,400}") {
            let token = encode_share_token(&text);
            prop_assert_eq!(decode_share_token(&token).unwrap(), text);
        }

        /// Tokens stay within the URI-component alphabet.
        #[test]
        fn token_alphabet_is_closed(text in "\\PC{1,200}") {
            let token = encode_share_token(&text);
            prop_assert!(token.chars().all(|c| TOKEN_ALPHABET.contains(c)));
        }
    }
}
