//! `uniqueItems` (§4.5): uniqueness is defined by canonical JSON equality. A `false` value always
//! passes.
use crate::{canonicalize::canonicalize, error::Result, output::OutputUnit, tree::Node};
use std::collections::HashSet;

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    if value.as_bool() != Some(true) {
        return Ok(true);
    }
    match instance.as_array() {
        Some(items) => {
            let mut seen = HashSet::with_capacity(items.len());
            for item in items {
                if !seen.insert(canonicalize(item)) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        None => Ok(true),
    }
}
