//! `exclusiveMaximum` (§4.5): strict numeric comparison.
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
    match instance.as_f64() {
        Some(n) => Ok(n < limit),
        None => Ok(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn strict_bound() {
        let value = build(&json!(5), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &build(&json!(5), "").unwrap(), &value, &mut errors).unwrap());
        assert!(validate(&value, &build(&json!(4.9), "").unwrap(), &value, &mut errors).unwrap());
    }
}
