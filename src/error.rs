//! Error types returned by schema registration and validation.
//!
//! These are distinct from a *validation failure* (an instance that does not conform to a
//! schema): that outcome is represented in [`crate::Output`]. The errors here only ever arise
//! from a schema that cannot be evaluated at all — malformed, referencing something that does
//! not exist, or using a feature this engine refuses to guess at.
use std::{error, fmt};

/// An error raised while registering or evaluating a schema.
///
/// None of these variants are produced by an instance failing to conform to a well-formed
/// schema; that is reported through [`crate::Output::Invalid`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A JSON value could not be represented as a located tree (for example, a number that
    /// cannot be represented as a 64-bit float).
    InvalidJson {
        /// Location of the offending node, if one could be determined.
        location: String,
        /// Human-readable reason.
        reason: String,
    },
    /// The schema itself is malformed: a keyword's value has the wrong shape (`allOf` is not an
    /// array, `properties` is not an object, and so on), or a schema node is neither a boolean
    /// nor an object.
    InvalidSchema {
        /// Location of the offending schema node.
        location: String,
    },
    /// A `$ref` could not be resolved: either its base URI is not registered, or the JSON
    /// Pointer fragment does not resolve to an existing node.
    InvalidReference {
        /// Location of the `$ref` keyword.
        location: String,
        /// The raw reference string that failed to resolve.
        reference: String,
    },
    /// A schema declared a `$schema` other than the 2020-12 meta-schema URI.
    UnsupportedDialect {
        /// The `$schema` value that was rejected.
        dialect: String,
    },
    /// A schema used a feature this engine deliberately refuses to support: embedded `$id`,
    /// `$anchor`, `$dynamicAnchor`, `$dynamicRef`, `unevaluatedProperties`, `unevaluatedItems`.
    UnsupportedFeature {
        /// Name of the unsupported keyword.
        feature: String,
        /// Location of the keyword.
        location: String,
    },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidJson { location, reason } => {
                write!(f, "invalid JSON value at {}: {}", location, reason)
            }
            Error::InvalidSchema { location } => {
                write!(f, "invalid schema at {}", location)
            }
            Error::InvalidReference {
                location,
                reference,
            } => write!(
                f,
                "could not resolve reference {:?} at {}",
                reference, location
            ),
            Error::UnsupportedDialect { dialect } => {
                write!(f, "unsupported dialect: {}", dialect)
            }
            Error::UnsupportedFeature { feature, location } => {
                write!(f, "unsupported feature {} at {}", feature, location)
            }
        }
    }
}

/// A convenience alias for results produced by this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
