//! `propertyNames` (§4.5): a schema applied to every member key of the instance, treated as a
//! string instance in its own right.
use crate::{dispatch, error::Result, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let members = match instance.as_object() {
        Some(members) => members,
        None => return Ok(true),
    };
    let mut overall_valid = true;
    for member in members {
        let (key_node, _) = member
            .as_property()
            .expect("object children are always property nodes");
        if !dispatch::apply(value, key_node, errors)? {
            overall_valid = false;
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
    fn rejects_keys_violating_the_schema() {
        let value = build(&json!({"maxLength": 2}), "").unwrap();
        let instance = build(&json!({"ab": 1, "too_long": 2}), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &instance, &value, &mut errors).unwrap());
        assert_eq!(errors.len(), 1);
    }
}
