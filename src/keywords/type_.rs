//! `type` (§4.5): instance must match at least one named type; `"integer"` is satisfied by a
//! number with no fractional part.
use crate::{
    error::{Error, Result},
    output::OutputUnit,
    tree::Node,
};

fn matches(instance: &Node, name: &str) -> bool {
    match name {
        "null" => instance.is_null(),
        "boolean" => instance.is_boolean(),
        "object" => instance.is_object(),
        "array" => instance.is_array(),
        "string" => instance.is_string(),
        "number" => instance.is_number(),
        "integer" => instance.is_integer(),
        _ => false,
    }
}

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    match value {
        Node::String(_, name) => Ok(matches(instance, name)),
        Node::Array(_, names) => {
            let mut any_matched = false;
            for name_node in names {
                let name = name_node.as_str().ok_or_else(|| Error::InvalidSchema {
                    location: name_node.location().to_string(),
                })?;
                if matches(instance, name) {
                    any_matched = true;
                }
            }
            Ok(any_matched)
        }
        _ => Err(Error::InvalidSchema {
            location: value.location().to_string(),
        }),
    }
}
