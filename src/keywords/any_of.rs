//! `anyOf` (§4.5): passes if any member passes. The error buffer accumulates from every attempt,
//! whether or not the keyword overall passes.
use crate::{dispatch, error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let schemas = tree::assert_array(value)?;
    let mut any_passed = false;
    for schema in schemas {
        if dispatch::apply(schema, instance, errors)? {
            any_passed = true;
        }
    }
    Ok(any_passed)
}
