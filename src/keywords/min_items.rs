//! `minItems` (§4.5).
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
    match instance.as_array() {
        Some(items) => Ok((items.len() as f64) >= limit),
        None => Ok(true),
    }
}
