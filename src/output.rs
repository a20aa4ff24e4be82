//! The Output Record (§3.3/§6.1): `{valid: true}` or `{valid: false, errors: [...]}`.
use serde::ser::SerializeMap;

/// One rejected `(schema location, instance location)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Location of the schema node that rejected.
    pub absolute_keyword_location: String,
    /// Location of the instance node that was rejected.
    pub instance_location: String,
    /// Reserved for extension; unused by this engine.
    pub keyword_location: Option<String>,
    /// Reserved for extension; unused by this engine.
    pub error: Option<String>,
}

impl OutputUnit {
    pub(crate) fn new(absolute_keyword_location: String, instance_location: String) -> Self {
        OutputUnit {
            absolute_keyword_location,
            instance_location,
            keyword_location: None,
            error: None,
        }
    }
}

impl serde::Serialize for OutputUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("absoluteKeywordLocation", &self.absolute_keyword_location)?;
        map.serialize_entry("instanceLocation", &self.instance_location)?;
        if let Some(keyword_location) = &self.keyword_location {
            map.serialize_entry("keywordLocation", keyword_location)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.end()
    }
}

/// The result of a [`crate::validate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The instance conformed to the schema.
    Valid,
    /// The instance did not conform. Always carries at least one [`OutputUnit`] (§3.3's
    /// invariant).
    Invalid(Vec<OutputUnit>),
}

impl Output {
    /// `true` for [`Output::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Output::Valid)
    }

    /// The collected errors, empty when [`Output::Valid`].
    pub fn errors(&self) -> &[OutputUnit] {
        match self {
            Output::Valid => &[],
            Output::Invalid(errors) => errors,
        }
    }
}

impl serde::Serialize for Output {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Output::Valid => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("valid", &true)?;
                map.end()
            }
            Output::Invalid(errors) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("errors", errors)?;
                map.end()
            }
        }
    }
}
