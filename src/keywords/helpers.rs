//! Shared utilities used by more than one keyword handler.
use crate::tree::{object_get, Node};

/// Looks up a sibling keyword's value node on the schema object that encloses the keyword
/// currently being evaluated — how `then`/`else` read `if` back (§4.5), and how
/// `additionalProperties` reads `properties`/`patternProperties`, and `contains` reads
/// `minContains`/`maxContains`.
pub(crate) fn sibling<'a>(parent_schema: &'a Node, keyword: &str) -> Option<&'a Node> {
    object_get(parent_schema, keyword)
}
