//! Deterministic JSON canonicalization, used by `const`, `enum`, and `uniqueItems` to decide
//! deep equality (§4.5's "Canonicalize (external)" primitive).
//!
//! Object keys are sorted lexicographically and the whole value is re-serialized through
//! `serde_json`, which gives us correct string escaping for free. `serde_json::Map` is backed by
//! an order-preserving map (the `preserve_order` feature, see `Cargo.toml`), so inserting in
//! sorted order yields a sorted serialization.
use crate::tree::Node;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Renders `node` to a canonical string: sorted object keys, no whitespace, deterministic number
/// formatting. Two nodes are equal under `const`/`enum`/`uniqueItems` iff their canonical forms
/// are equal strings.
pub(crate) fn canonicalize(node: &Node) -> String {
    serde_json::to_string(&to_canonical_value(node))
        .expect("canonical values never fail to serialize")
}

fn to_canonical_value(node: &Node) -> Value {
    match node {
        Node::Null(_) => Value::Null,
        Node::Boolean(_, b) => Value::Bool(*b),
        Node::Number(_, n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Node::String(_, s) => Value::String(s.clone()),
        Node::Array(_, items) => Value::Array(items.iter().map(to_canonical_value).collect()),
        Node::Object(_, props) => {
            let mut sorted: BTreeMap<&str, Value> = BTreeMap::new();
            for prop in props {
                if let Some((key, value)) = prop.as_property() {
                    if let Some(key) = key.as_str() {
                        sorted.insert(key, to_canonical_value(value));
                    }
                }
            }
            let mut map = Map::with_capacity(sorted.len());
            for (key, value) in sorted {
                map.insert(key.to_string(), value);
            }
            Value::Object(map)
        }
        Node::Property(..) => unreachable!("property nodes never appear as values"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    fn canon(value: &Value) -> String {
        canonicalize(&build(value, "").unwrap())
    }

    #[test]
    fn object_keys_are_sorted() {
        assert_eq!(canon(&json!({"b": 1, "a": 2})), canon(&json!({"a": 2, "b": 1})));
    }

    #[test]
    fn equality_is_reflexive_symmetric_transitive() {
        let a = json!({"x": [1, 2], "y": "z"});
        let b = json!({"y": "z", "x": [1, 2]});
        let c = json!({"x": [1, 2], "y": "z"});
        assert_eq!(canon(&a), canon(&a));
        assert_eq!(canon(&a), canon(&b));
        assert_eq!(canon(&b), canon(&a));
        assert_eq!(canon(&b), canon(&c));
        assert_eq!(canon(&a), canon(&c));
    }

    #[test]
    fn distinct_values_differ() {
        assert_ne!(canon(&json!(1)), canon(&json!(1.5)));
        assert_ne!(canon(&json!("a")), canon(&json!("b")));
    }
}
