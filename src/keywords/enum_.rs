//! `enum` (§4.5): canonicalize(instance) equals canonicalize of any element.
use crate::{
    canonicalize::canonicalize,
    error::{Error, Result},
    output::OutputUnit,
    tree::Node,
};

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let options = value.as_array().ok_or_else(|| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    let instance_canonical = canonicalize(instance);
    Ok(options
        .iter()
        .any(|option| canonicalize(option) == instance_canonical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    #[test]
    fn passes_for_any_listed_option() {
        let value = build(&json!(["red", "green", "blue"]), "").unwrap();
        let matching = build(&json!("green"), "").unwrap();
        let not_matching = build(&json!("purple"), "").unwrap();
        let mut errors = Vec::new();
        assert!(validate(&value, &matching, &value, &mut errors).unwrap());
        assert!(!validate(&value, &not_matching, &value, &mut errors).unwrap());
    }
}
