//! The three IRI/URI primitives `$ref` resolution is built on (§6.2). Out-of-scope per §1 is
//! full IRI-reference parsing; this wraps the `url` crate, which is what the teacher reaches for
//! everywhere it needs to resolve or parse a URI.
use url::Url;

/// The parsed form of an IRI reference: only the fragment is needed anywhere in this crate.
pub(crate) struct ParsedIriReference {
    pub(crate) fragment: Option<String>,
}

/// Parses an IRI reference, extracting (at least) its fragment. Does not require the reference
/// to be absolute.
pub(crate) fn parse_iri_reference(s: &str) -> ParsedIriReference {
    match s.split_once('#') {
        Some((_, fragment)) => ParsedIriReference {
            fragment: Some(fragment.to_string()),
        },
        None => ParsedIriReference { fragment: None },
    }
}

/// Resolves `reference` against `base`, the way a browser resolves a relative `href`. Returns
/// `reference` unchanged if `base` is empty or either string fails to parse as a URI — callers
/// are expected to split the result on `#` themselves afterwards.
pub(crate) fn resolve_iri(reference: &str, base: &str) -> String {
    if base.is_empty() {
        return reference.to_string();
    }
    match Url::parse(base) {
        Ok(base_url) => match base_url.join(reference) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => reference.to_string(),
        },
        Err(_) => reference.to_string(),
    }
}

/// Normalizes `s` to an absolute IRI string, when it already looks absolute; otherwise returns it
/// unchanged.
pub(crate) fn to_absolute_iri(s: &str) -> String {
    match Url::parse(s) {
        Ok(url) => url.to_string(),
        Err(_) => s.to_string(),
    }
}

/// Splits a resolved reference into its base (before `#`) and fragment (after `#`, empty string
/// if absent), using [`parse_iri_reference`] for the fragment extraction `$ref` resolution needs
/// (§6.2) rather than re-splitting on `#` by hand.
pub(crate) fn split_fragment(s: &str) -> (&str, &str) {
    match parse_iri_reference(s).fragment {
        Some(fragment) => {
            let base_len = s.len() - fragment.len() - 1;
            (&s[..base_len], &s[base_len + 1..])
        }
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iri_reference_extracts_fragment() {
        assert_eq!(
            parse_iri_reference("https://example.com/s#/a/b").fragment,
            Some("/a/b".to_string())
        );
        assert_eq!(parse_iri_reference("#/a/b").fragment, Some("/a/b".to_string()));
        assert_eq!(parse_iri_reference("https://example.com/s").fragment, None);
    }

    #[test]
    fn split_fragment_separates_base_and_fragment() {
        assert_eq!(
            split_fragment("https://example.com/s#/a/b"),
            ("https://example.com/s", "/a/b")
        );
        assert_eq!(split_fragment("https://example.com/s"), ("https://example.com/s", ""));
    }

    #[test]
    fn resolve_iri_against_absolute_base() {
        assert_eq!(
            resolve_iri("other#/x", "https://example.com/dir/schema.json"),
            "https://example.com/dir/other#/x"
        );
    }

    #[test]
    fn resolve_iri_with_empty_base_is_identity() {
        assert_eq!(resolve_iri("#/x", ""), "#/x");
    }
}
