//! `pattern` (§4.5): Unicode regex test; no anchors implied.
use crate::{error::{Error, Result}, output::OutputUnit, tree::Node};
use regex::Regex;

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let pattern = value.as_str().ok_or_else(|| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    let regex = Regex::new(pattern).map_err(|_| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    match instance.as_str() {
        Some(s) => Ok(regex.is_match(s)),
        None => Ok(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn matches_anywhere_in_the_string_unless_anchored() {
        let value = build(&json!("foo"), "").unwrap();
        let instance = build(&json!("xfoox"), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &instance, &value, &mut errors).unwrap());
    }

    #[test]
    fn non_string_instance_passes() {
        let value = build(&json!("^\\d+$"), "").unwrap();
        let instance = build(&json!(42), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &instance, &value, &mut errors).unwrap());
    }
}
