//! Keyword Dispatch and the validator recursion (§4.3/§4.4): the heart of the engine.
use crate::{
    error::{Error, Result},
    keywords,
    output::OutputUnit,
    tree::Node,
};

/// The signature every keyword handler implements (§9, "Dynamic keyword dispatch"):
/// `(value-node, instance-node, parent-schema-node, error-sink) -> bool`.
pub(crate) type Handler =
    fn(&Node, &Node, &Node, &mut Vec<OutputUnit>) -> Result<bool>;

/// Applies a schema node to an instance node, appending to `errors` per the buffering discipline
/// of §4.4. Returns whether the instance conformed.
pub(crate) fn apply(schema: &Node, instance: &Node, errors: &mut Vec<OutputUnit>) -> Result<bool> {
    match schema {
        Node::Boolean(location, true) => {
            let _ = location;
            Ok(true)
        }
        Node::Boolean(location, false) => {
            errors.push(OutputUnit::new(
                location.clone(),
                instance.location().to_string(),
            ));
            Ok(false)
        }
        Node::Object(_, properties) => {
            let mut overall_valid = true;
            for property in properties {
                let (key_node, value_node) = property
                    .as_property()
                    .expect("object children are always property nodes");
                let keyword = key_node
                    .as_str()
                    .expect("property keys are always string nodes");
                if let Some(handler) = keywords::dispatch(keyword) {
                    let mut child_errors = Vec::new();
                    let valid = handler(value_node, instance, schema, &mut child_errors)?;
                    if !valid {
                        errors.push(OutputUnit::new(
                            value_node.location().to_string(),
                            instance.location().to_string(),
                        ));
                        errors.append(&mut child_errors);
                        overall_valid = false;
                    }
                }
                // Unknown keywords are silently ignored (§4.3).
            }
            Ok(overall_valid)
        }
        other => Err(Error::InvalidSchema {
            location: other.location().to_string(),
        }),
    }
}

/// Applies `schema` to `instance` purely to decide a boolean outcome, discarding any errors the
/// recursion would otherwise have buffered. Used by `not`, `if`, and the "is this branch valid"
/// half of `anyOf`/`oneOf`'s bookkeeping where a throwaway buffer is required (§4.4).
pub(crate) fn is_valid(schema: &Node, instance: &Node) -> Result<bool> {
    let mut throwaway = Vec::new();
    apply(schema, instance, &mut throwaway)
}
