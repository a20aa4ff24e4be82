//! `items` (§4.5): a single schema applied to every instance element past the ones already
//! covered by a sibling `prefixItems`, if any.
use crate::{dispatch, error::Result, keywords::helpers, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let items = match instance.as_array() {
        Some(items) => items,
        None => return Ok(true),
    };
    let offset = match helpers::sibling(parent, "prefixItems") {
        Some(prefix) => crate::tree::assert_array(prefix)?.len(),
        None => 0,
    };
    let mut overall_valid = true;
    for item in items.iter().skip(offset) {
        if !dispatch::apply(value, item, errors)? {
            overall_valid = false;
        }
    }
    Ok(overall_valid)
}
