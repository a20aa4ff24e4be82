//! `allOf` (§4.5): every member schema must pass; errors from every failing member are retained.
use crate::{dispatch, error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let schemas = tree::assert_array(value)?;
    let mut overall_valid = true;
    for schema in schemas {
        if !dispatch::apply(schema, instance, errors)? {
            overall_valid = false;
        }
    }
    Ok(overall_valid)
}
