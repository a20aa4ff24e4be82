//! `$id` (§4.5): only legal at the document root, where its location is exactly `#/$id`. An
//! embedded `$id` elsewhere in the schema is an unsupported feature.
use crate::{
    error::{Error, Result},
    output::OutputUnit,
    tree::Node,
};

pub(crate) fn validate(
    value: &Node,
    _instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    if value.location().ends_with("#/$id") {
        Ok(true)
    } else {
        Err(Error::UnsupportedFeature {
            feature: "embedded $id".to_string(),
            location: value.location().to_string(),
        })
    }
}
