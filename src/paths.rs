//! Location string construction: `<base-uri>#<json-pointer>`, RFC 6901 escaped and then
//! percent-encoded for fragment safety, per §6.3.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that must stay literal in a fragment because they are either JSON Pointer
/// structure (`/`) or already produced by RFC 6901 escaping (`~`), plus the usual unreserved
/// punctuation. Everything else is percent-encoded.
const FRAGMENT_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Builds the root location for a tree rooted at `base_uri`: `<base-uri>#`.
pub(crate) fn root_location(base_uri: &str) -> String {
    format!("{}#", base_uri)
}

/// Escapes a raw object key per RFC 6901 (`~` → `~0`, `/` → `~1`), then percent-encodes it for
/// fragment safety, and appends it as a new segment of `location`.
pub(crate) fn append_property(location: &str, key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            '~' => escaped.push_str("~0"),
            '/' => escaped.push_str("~1"),
            other => escaped.push(other),
        }
    }
    let encoded = utf8_percent_encode(&escaped, FRAGMENT_SAFE);
    format!("{}/{}", location, encoded)
}

/// Appends an array index segment (decimal, never needs escaping).
pub(crate) fn append_index(location: &str, index: usize) -> String {
    format!("{}/{}", location, index)
}

/// Splits a location into its base URI and pointer, at the first `#`.
///
/// Every location produced by [`root_location`]/[`append_property`]/[`append_index`] contains
/// exactly one `#`, so this never panics on a location this module produced.
pub(crate) fn split_location(location: &str) -> (&str, &str) {
    location
        .split_once('#')
        .expect("locations always contain '#'")
}

/// Decodes a single JSON Pointer reference-token: percent-decodes it, then undoes RFC 6901
/// escaping (`~1` → `/`, `~0` → `~`). Order matters: percent-decoding first, like the rest of
/// this crate's location handling.
pub(crate) fn decode_pointer_token(token: &str) -> String {
    let percent_decoded = percent_encoding::percent_decode_str(token)
        .decode_utf8_lossy()
        .into_owned();
    let mut out = String::with_capacity(percent_decoded.len());
    let mut chars = percent_decoded.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.peek() {
                Some('0') => {
                    out.push('~');
                    chars.next();
                }
                Some('1') => {
                    out.push('/');
                    chars.next();
                }
                _ => out.push('~'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_location_is_hash_terminated() {
        assert_eq!(root_location(""), "#");
        assert_eq!(root_location("https://example.com/s"), "https://example.com/s#");
    }

    #[test]
    fn property_escaping_matches_rfc6901_then_percent_encoding() {
        assert_eq!(append_property("#", "foo"), "#/foo");
        assert_eq!(append_property("#", "a/b"), "#/a~1b");
        assert_eq!(append_property("#", "a~b"), "#/a~0b");
        assert_eq!(append_property("#", "^f"), "#/%5Ef");
    }

    #[test]
    fn index_escaping_is_plain_decimal() {
        assert_eq!(append_index("#/items", 3), "#/items/3");
    }

    #[test]
    fn decode_pointer_token_reverses_escaping() {
        assert_eq!(decode_pointer_token("a~1b"), "a/b");
        assert_eq!(decode_pointer_token("a~0b"), "a~b");
        assert_eq!(decode_pointer_token("%5Ef"), "^f");
    }

    #[test]
    fn split_location_finds_first_hash() {
        assert_eq!(split_location("https://x#/a/b"), ("https://x", "/a/b"));
        assert_eq!(split_location("#/a"), ("", "/a"));
    }
}
