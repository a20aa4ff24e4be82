//! `patternProperties` (§4.5): an object mapping regex patterns to schemas; every instance member
//! whose key matches a pattern is validated against that pattern's schema. A key may match more
//! than one pattern, in which case every matching schema applies.
use crate::{dispatch, error::{Error, Result}, output::OutputUnit, tree::{self, Node}};
use regex::Regex;

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let members = tree::assert_object(value)?;
    let instance_members = match instance.as_object() {
        Some(members) => members,
        None => return Ok(true),
    };
    let mut overall_valid = true;
    for pattern_member in members {
        let (pattern_node, schema) = pattern_member
            .as_property()
            .expect("object children are always property nodes");
        let pattern = pattern_node.as_str().expect("property keys are always string nodes");
        let regex = Regex::new(pattern).map_err(|_| Error::InvalidSchema {
            location: pattern_node.location().to_string(),
        })?;
        for instance_member in instance_members {
            let (key_node, instance_value) = instance_member
                .as_property()
                .expect("object children are always property nodes");
            let key = key_node.as_str().expect("property keys are always string nodes");
            if regex.is_match(key) && !dispatch::apply(schema, instance_value, errors)? {
                overall_valid = false;
            }
        }
    }
    Ok(overall_valid)
}
