//! `maxLength` (§4.5): length is the count of Unicode code points, not code units or bytes.
use crate::{error::{Error, Result}, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let limit = value.as_f64().ok_or_else(|| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    match instance.as_str() {
        Some(s) => Ok((s.chars().count() as f64) <= limit),
        None => Ok(true),
    }
}
