//! `dependentSchemas` (§4.5): an object mapping property names to schemas; when the instance has
//! the named property, the whole instance (not just that property) is validated against the
//! associated schema.
use crate::{dispatch, error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let members = tree::assert_object(value)?;
    if !instance.is_object() {
        return Ok(true);
    }
    let mut overall_valid = true;
    for member in members {
        let (key_node, schema) = member
            .as_property()
            .expect("object children are always property nodes");
        let key = key_node.as_str().expect("property keys are always string nodes");
        if tree::object_has(instance, key) && !dispatch::apply(schema, instance, errors)? {
            overall_valid = false;
        }
    }
    Ok(overall_valid)
}
