//! `not` (§4.5): passes iff the sub-schema fails against the instance. No child errors.
use crate::{dispatch, error::Result, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    Ok(!dispatch::is_valid(value, instance)?)
}
