//! `additionalProperties` (§4.5): applied to every instance member whose key is covered by
//! neither sibling `properties` nor sibling `patternProperties`.
//!
//! The plain `regex` crate has no lookaround, so unlike an engine that can express "anything not
//! matching this pattern" as a single compiled regex, membership here is a direct set/pattern
//! check in code rather than a constructed "never match the complement" regex.
use crate::{
    dispatch,
    error::{Error, Result},
    keywords::helpers,
    output::OutputUnit,
    tree::{self, Node},
};
use regex::Regex;

/// Compiles every sibling `patternProperties` pattern once, up front, so membership checks
/// against each instance member don't recompile the same regex repeatedly.
fn compile_pattern_properties(parent: &Node) -> Result<Vec<Regex>> {
    let pattern_properties = match helpers::sibling(parent, "patternProperties") {
        Some(node) => node,
        None => return Ok(Vec::new()),
    };
    tree::assert_object(pattern_properties)?
        .iter()
        .map(|member| {
            let (pattern_node, _) = member
                .as_property()
                .expect("object children are always property nodes");
            let pattern = pattern_node.as_str().expect("property keys are always string nodes");
            Regex::new(pattern).map_err(|_| Error::InvalidSchema {
                location: pattern_node.location().to_string(),
            })
        })
        .collect()
}

fn is_covered(key: &str, properties: Option<&Node>, patterns: &[Regex]) -> bool {
    if let Some(properties) = properties {
        if tree::object_has(properties, key) {
            return true;
        }
    }
    patterns.iter().any(|pattern| pattern.is_match(key))
}

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let instance_members = match instance.as_object() {
        Some(members) => members,
        None => return Ok(true),
    };
    let properties = helpers::sibling(parent, "properties");
    let patterns = compile_pattern_properties(parent)?;
    let mut overall_valid = true;
    for member in instance_members {
        let (key_node, instance_value) = member
            .as_property()
            .expect("object children are always property nodes");
        let key = key_node.as_str().expect("property keys are always string nodes");
        if is_covered(key, properties, &patterns) {
            continue;
        }
        if !dispatch::apply(value, instance_value, errors)? {
            overall_valid = false;
        }
    }
    Ok(overall_valid)
}
