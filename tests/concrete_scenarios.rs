//! The literal schema/instance/output scenarios this engine's behavior was pinned against.
use located_json_schema::{validate, Output};
use serde_json::json;

fn locations(output: &Output) -> Vec<(&str, &str)> {
    output
        .errors()
        .iter()
        .map(|unit| (unit.absolute_keyword_location.as_str(), unit.instance_location.as_str()))
        .collect()
}

#[test]
fn ref_into_a_failing_sibling_definition() {
    let schema = json!({"$ref": "#/$defs/string", "$defs": {"string": {"type": "string"}}});
    let output = validate(&schema, &json!(42)).unwrap();
    assert!(!output.is_valid());
    assert_eq!(
        locations(&output),
        vec![("#/$ref", "#"), ("#/$defs/string/type", "#")]
    );
}

#[test]
fn additional_properties_false_rejects_every_member() {
    let schema = json!({"additionalProperties": false});
    let output = validate(&schema, &json!({"foo": 42, "bar": 24})).unwrap();
    assert!(!output.is_valid());
    assert_eq!(
        locations(&output),
        vec![
            ("#/additionalProperties", "#"),
            ("#/additionalProperties", "#/foo"),
            ("#/additionalProperties", "#/bar"),
        ]
    );
}

#[test]
fn properties_and_required_report_in_document_order() {
    let schema = json!({
        "properties": {"foo": {"type": "string"}, "bar": {"type": "boolean"}},
        "required": ["foo", "bar"],
    });
    let output = validate(&schema, &json!({"foo": 42})).unwrap();
    assert!(!output.is_valid());
    assert_eq!(
        locations(&output),
        vec![
            ("#/properties", "#"),
            ("#/properties/foo/type", "#/foo"),
            ("#/required", "#"),
        ]
    );
}

#[test]
fn pattern_properties_keys_are_percent_encoded_in_locations() {
    let schema = json!({
        "patternProperties": {"^f": {"type": "string"}, "^b": {"type": "number"}},
    });
    let output = validate(&schema, &json!({"foo": 42, "bar": true})).unwrap();
    assert!(!output.is_valid());
    let locs = locations(&output);
    assert!(locs.contains(&("#/patternProperties/%5Ef/type", "#/foo")));
    assert!(locs.contains(&("#/patternProperties/%5Eb/type", "#/bar")));
}

#[test]
fn if_then_fails_when_then_does() {
    let schema = json!({"if": {"type": "string"}, "then": {"minLength": 1}});
    let output = validate(&schema, &json!("")).unwrap();
    assert!(!output.is_valid());
    assert_eq!(
        locations(&output),
        vec![("#/then", "#"), ("#/then/minLength", "#")]
    );
}

#[test]
fn if_then_passes_when_then_does() {
    let schema = json!({"if": {"type": "string"}, "then": {"minLength": 1}});
    let output = validate(&schema, &json!("foo")).unwrap();
    assert!(output.is_valid());
}

#[test]
fn nested_properties_report_every_level() {
    let schema = json!({"properties": {"foo": {"properties": {"bar": {"type": "boolean"}}}}});
    let output = validate(&schema, &json!({"foo": {"bar": 42}})).unwrap();
    assert!(!output.is_valid());
    assert_eq!(
        locations(&output),
        vec![
            ("#/properties", "#"),
            ("#/properties/foo/properties", "#/foo"),
            ("#/properties/foo/properties/bar/type", "#/foo/bar"),
        ]
    );
}
