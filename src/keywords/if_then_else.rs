//! `then`/`else` (§4.5): conditioned on a sibling `if`, evaluated with a throwaway buffer. `if`
//! alone has no handler entry; its effect is realized entirely through these two.
use crate::{dispatch, error::Result, keywords::helpers, output::OutputUnit, tree::Node};

pub(crate) fn then(
    value: &Node,
    instance: &Node,
    parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    match helpers::sibling(parent, "if") {
        Some(if_schema) if dispatch::is_valid(if_schema, instance)? => {
            dispatch::apply(value, instance, errors)
        }
        _ => Ok(true),
    }
}

pub(crate) fn else_(
    value: &Node,
    instance: &Node,
    parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    match helpers::sibling(parent, "if") {
        Some(if_schema) if !dispatch::is_valid(if_schema, instance)? => {
            dispatch::apply(value, instance, errors)
        }
        _ => Ok(true),
    }
}
