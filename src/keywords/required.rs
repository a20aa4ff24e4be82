//! `required` (§4.5): an array of property names the instance, if an object, must contain.
use crate::{error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let names = tree::assert_array(value)?;
    if !instance.is_object() {
        return Ok(true);
    }
    for name in names {
        let key = name.as_str().ok_or_else(|| crate::error::Error::InvalidSchema {
            location: name.location().to_string(),
        })?;
        if !tree::object_has(instance, key) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn missing_required_property_fails() {
        let value = build(&json!(["a", "b"]), "").unwrap();
        let instance = build(&json!({"a": 1}), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &instance, &value, &mut errors).unwrap());
    }

    #[test]
    fn non_object_instance_always_passes() {
        let value = build(&json!(["a"]), "").unwrap();
        let instance = build(&json!([1, 2]), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &instance, &value, &mut errors).unwrap());
    }
}
