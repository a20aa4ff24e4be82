//! A JSON Schema draft 2020-12 validator built on a location-tracking JSON tree.
//!
//! Two entry points: [`register_schema`] pre-registers a schema document under an absolute URI
//! so later `$ref`s can find it, and [`validate`] checks an instance against a schema, returning
//! an [`Output`] record of every location that rejected.

mod canonicalize;
mod dispatch;
mod error;
mod iri;
mod keywords;
mod output;
mod paths;
mod registry;
mod tree;

pub use error::{Error, Result};
pub use output::{Output, OutputUnit};

use serde_json::Value;

const DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

fn check_dialect(schema: &Value) -> Result<()> {
    if let Some(declared) = schema.get("$schema").and_then(Value::as_str) {
        if declared != DIALECT {
            return Err(Error::UnsupportedDialect {
                dialect: declared.to_string(),
            });
        }
    }
    Ok(())
}

fn schema_uri(schema: &Value) -> &str {
    schema
        .get("$id")
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Registers `schema` under `uri`, persisting it until overwritten or explicitly unregistered.
/// Lets later `$ref`s resolve against it without relying on [`validate`]'s own auto-registration.
pub fn register_schema(schema: &Value, uri: &str) -> Result<()> {
    check_dialect(schema)?;
    registry::register(schema, uri)
}

/// Validates `instance` against `schema`.
///
/// `schema` is registered under its own `$id` (or `""` if it has none) for the duration of the
/// call, so internal `$ref`s can resolve, and unregistered again before returning — including on
/// error. Concurrent calls that both land on the same URI race (§5 of the design); callers that
/// need concurrency should pre-register under distinct URIs with [`register_schema`] and avoid
/// overlapping calls that would auto-register the same URI.
pub fn validate(schema: &Value, instance: &Value) -> Result<Output> {
    check_dialect(schema)?;
    let uri = schema_uri(schema).to_string();
    registry::register(schema, &uri)?;
    let result = (|| {
        let schema_tree = tree::build(schema, &uri)?;
        let instance_tree = tree::build(instance, "")?;
        let mut errors = Vec::new();
        let valid = dispatch::apply(&schema_tree, &instance_tree, &mut errors)?;
        Ok(if valid {
            Output::Valid
        } else {
            Output::Invalid(errors)
        })
    })();
    registry::unregister(&uri);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_instance_produces_valid_output() {
        let schema = json!({"type": "string"});
        let instance = json!("hello");
        let output = validate(&schema, &instance).unwrap();
        assert!(output.is_valid());
    }

    #[test]
    fn invalid_instance_collects_errors() {
        let schema = json!({"type": "string"});
        let instance = json!(42);
        let output = validate(&schema, &instance).unwrap();
        assert!(!output.is_valid());
        assert_eq!(output.errors().len(), 1);
        assert_eq!(output.errors()[0].absolute_keyword_location, "#/type");
        assert_eq!(output.errors()[0].instance_location, "#");
    }

    #[test]
    fn unsupported_dialect_is_rejected() {
        let schema = json!({"$schema": "https://json-schema.org/draft-07/schema#"});
        let instance = json!(1);
        assert!(matches!(
            validate(&schema, &instance),
            Err(Error::UnsupportedDialect { .. })
        ));
    }

    #[test]
    fn ref_resolves_against_the_registered_document() {
        let schema = json!({
            "$ref": "#/$defs/positive",
            "$defs": {"positive": {"minimum": 0}},
        });
        let instance = json!(-5);
        let output = validate(&schema, &instance).unwrap();
        assert!(!output.is_valid());
    }

    #[test]
    fn pre_registered_schema_is_visible_to_a_separate_ref() {
        let referenced = json!({"type": "string"});
        register_schema(&referenced, "https://example.com/lib-test-schema").unwrap();
        let schema = json!({"$ref": "https://example.com/lib-test-schema"});
        let instance = json!(42);
        let output = validate(&schema, &instance).unwrap();
        assert!(!output.is_valid());
    }

    #[test]
    fn the_registry_is_unregistered_after_validate_returns() {
        let schema = json!({"type": "string"});
        let instance = json!("ok");
        validate(&schema, &instance).unwrap();
        assert!(registry::lookup("").is_none());
    }
}
