//! `prefixItems` (§4.5): an array of schemas, each applied to the instance element at the same
//! index. Extra instance elements, or a non-array instance, are unconstrained.
use crate::{dispatch, error::Result, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let schemas = crate::tree::assert_array(value)?;
    let items = match instance.as_array() {
        Some(items) => items,
        None => return Ok(true),
    };
    let mut overall_valid = true;
    for (schema, item) in schemas.iter().zip(items.iter()) {
        if !dispatch::apply(schema, item, errors)? {
            overall_valid = false;
        }
    }
    Ok(overall_valid)
}
