//! `$ref` (§4.5): resolves the reference against the enclosing schema's own URI, looks the target
//! base URI up in the registry, walks the fragment as a JSON Pointer, and recurses into the
//! target node.
//!
//! The enclosing schema's URI is read off the `$ref` keyword node's own location rather than
//! tracked separately: a location's text before `#` is empty exactly when the tree it belongs to
//! was registered anonymously, under `""`.
use crate::{
    dispatch,
    error::{Error, Result},
    iri, paths, registry,
    output::OutputUnit,
    tree::{self, Node},
};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let reference = value.as_str().ok_or_else(|| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    let (schema_uri, _) = paths::split_location(value.location());
    let resolved = iri::resolve_iri(reference, schema_uri);
    let (target_base, fragment) = iri::split_fragment(&resolved);
    let target_base = iri::to_absolute_iri(target_base);

    let root = registry::lookup(&target_base).ok_or_else(|| Error::InvalidReference {
        location: value.location().to_string(),
        reference: reference.to_string(),
    })?;
    let target = tree::pointer_get(fragment, &root)?;
    dispatch::apply(target, instance, errors)
}
