//! `const` (§4.5): deep equality via canonicalize(instance) == canonicalize(keyword-value).
use crate::{canonicalize::canonicalize, error::Result, output::OutputUnit, tree::Node};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    Ok(canonicalize(value) == canonicalize(instance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn matches_only_the_exact_value() {
        let value = build(&json!({"a": 1, "b": [1, 2]}), "").unwrap();
        let same_order = build(&json!({"a": 1, "b": [1, 2]}), "").unwrap();
        let reordered = build(&json!({"b": [1, 2], "a": 1}), "").unwrap();
        let different = build(&json!({"a": 1, "b": [2, 1]}), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &same_order, &value, &mut errors).unwrap());
        assert!(validate(&value, &reordered, &value, &mut errors).unwrap());
        assert!(!validate(&value, &different, &value, &mut errors).unwrap());
    }
}
