//! Keywords named by the non-goals as rejected rather than silently ignored (§1): each
//! unconditionally fails `UnsupportedFeature`, naming itself and its location.
use crate::{error::{Error, Result}, output::OutputUnit, tree::Node};

fn reject(feature: &str, value: &Node) -> Result<bool> {
    Err(Error::UnsupportedFeature {
        feature: feature.to_string(),
        location: value.location().to_string(),
    })
}

pub(crate) fn anchor(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    reject("$anchor", value)
}

pub(crate) fn dynamic_anchor(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    reject("$dynamicAnchor", value)
}

pub(crate) fn dynamic_ref(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    reject("$dynamicRef", value)
}

pub(crate) fn unevaluated_properties(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    reject("unevaluatedProperties", value)
}

pub(crate) fn unevaluated_items(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    reject("unevaluatedItems", value)
}
