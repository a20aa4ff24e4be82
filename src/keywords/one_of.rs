//! `oneOf` (§4.5): exactly one member schema must pass; counts successes.
use crate::{dispatch, error::Result, output::OutputUnit, tree::{self, Node}};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let schemas = tree::assert_array(value)?;
    let mut passed = 0usize;
    for schema in schemas {
        if dispatch::apply(schema, instance, errors)? {
            passed += 1;
        }
    }
    Ok(passed == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn exactly_one_match_passes() {
        let value = build(&json!([{"type": "string"}, {"type": "number"}]), "").unwrap();
        let instance = build(&json!(42), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &instance, &value, &mut errors).unwrap());
    }

    #[test]
    fn more_than_one_match_fails() {
        let value = build(&json!([{"minimum": 0}, {"maximum": 100}]), "").unwrap();
        let instance = build(&json!(50), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &instance, &value, &mut errors).unwrap());
    }

    #[test]
    fn zero_matches_fails() {
        let value = build(&json!([{"type": "string"}, {"type": "boolean"}]), "").unwrap();
        let instance = build(&json!(42), "").unwrap();
        let mut errors = Vec::new();
        assert!(!validate(&value, &instance, &value, &mut errors).unwrap());
    }
}
