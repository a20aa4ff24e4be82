//! `dependentRequired` (§4.5): for every key present in the instance, every key listed for it
//! here must also be present. A single keyword-level error on failure; no child errors.
use crate::{error::{Error, Result}, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let members = tree::assert_object(value)?;
    if !instance.is_object() {
        return Ok(true);
    }
    for member in members {
        let (key_node, required) = member
            .as_property()
            .expect("object children are always property nodes");
        let key = key_node.as_str().expect("property keys are always string nodes");
        if !tree::object_has(instance, key) {
            continue;
        }
        for name in tree::assert_array(required)? {
            let required_key = name.as_str().ok_or_else(|| Error::InvalidSchema {
                location: name.location().to_string(),
            })?;
            if !tree::object_has(instance, required_key) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
