//! `properties` (§4.5): an object mapping property names to schemas, each applied to the
//! instance's same-named member, if present.
use crate::{dispatch, error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let members = tree::assert_object(value)?;
    let mut overall_valid = true;
    for member in members {
        let (key_node, schema) = member
            .as_property()
            .expect("object children are always property nodes");
        let key = key_node.as_str().expect("property keys are always string nodes");
        if let Some(instance_value) = tree::object_get(instance, key) {
            if !dispatch::apply(schema, instance_value, errors)? {
                overall_valid = false;
            }
        }
    }
    Ok(overall_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn validates_present_members_and_ignores_absent_ones() {
        let value = build(&json!({"a": {"type": "string"}, "b": {"type": "number"}}), "").unwrap();
        let instance = build(&json!({"a": "x"}), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &instance, &value, &mut errors).unwrap());
    }

    #[test]
    fn mismatched_member_fails() {
        let value = build(&json!({"a": {"type": "string"}}), "").unwrap();
        let instance = build(&json!({"a": 1}), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &instance, &value, &mut errors).unwrap());
        assert_eq!(errors.len(), 1);
    }
}
