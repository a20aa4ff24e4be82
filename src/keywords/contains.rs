//! `contains` (§4.5): counts passing elements against a shared, discarded error buffer, then
//! checks the count against sibling `minContains` (default 1) and `maxContains` (default ∞).
use crate::{dispatch, error::Result, keywords::helpers, output::OutputUnit, tree::Node};

fn bound(parent: &Node, keyword: &str, default: f64) -> Result<f64> {
    match helpers::sibling(parent, keyword) {
        Some(value) => value.as_f64().ok_or_else(|| crate::error::Error::InvalidSchema {
            location: value.location().to_string(),
        }),
        None => Ok(default),
    }
}

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let items = match instance.as_array() {
        Some(items) => items,
        None => return Ok(true),
    };
    let min = bound(parent, "minContains", 1.0)?;
    let max = bound(parent, "maxContains", f64::INFINITY)?;

    let mut shared = Vec::new();
    let mut passing = 0u64;
    for item in items {
        if dispatch::apply(value, item, &mut shared)? {
            passing += 1;
        }
    }
    let count = passing as f64;
    Ok(count >= min && count <= max)
}
