//! One handler per supported keyword (§4.5), and the dispatch table that maps a keyword name to
//! its handler. Modeled after the teacher's `schemas::Draft::get_validator`, collapsed to a
//! single dialect (2020-12 only, §6.4) and a single `match` instead of a per-draft table.
mod additional_properties;
mod all_of;
mod any_of;
mod const_;
mod contains;
mod dependent_required;
mod dependent_schemas;
mod enum_;
mod exclusive_maximum;
mod exclusive_minimum;
mod format;
mod helpers;
mod id_;
mod if_then_else;
mod items;
mod max_items;
mod max_length;
mod max_properties;
mod maximum;
mod min_items;
mod min_length;
mod min_properties;
mod minimum;
mod multiple_of;
mod not;
mod one_of;
mod pattern;
mod pattern_properties;
mod prefix_items;
mod properties;
mod property_names;
mod ref_;
mod required;
mod type_;
mod unique_items;
mod unsupported;

use crate::dispatch::Handler;

/// Returns the handler registered for `keyword`, or `None` if it is unrecognized (in which case
/// the dispatcher silently ignores it, §4.3) or recognized but handled indirectly — `if` has no
/// entry of its own; its effect is realized through `then`/`else` reading it back from the
/// parent schema node (§4.5).
pub(crate) fn dispatch(keyword: &str) -> Option<Handler> {
    match keyword {
        "$ref" => Some(ref_::validate),
        "$id" => Some(id_::validate),
        "$anchor" => Some(unsupported::anchor),
        "$dynamicAnchor" => Some(unsupported::dynamic_anchor),
        "$dynamicRef" => Some(unsupported::dynamic_ref),
        "unevaluatedProperties" => Some(unsupported::unevaluated_properties),
        "unevaluatedItems" => Some(unsupported::unevaluated_items),

        "allOf" => Some(all_of::validate),
        "anyOf" => Some(any_of::validate),
        "oneOf" => Some(one_of::validate),
        "not" => Some(not::validate),

        "then" => Some(if_then_else::then),
        "else" => Some(if_then_else::else_),

        "properties" => Some(properties::validate),
        "patternProperties" => Some(pattern_properties::validate),
        "additionalProperties" => Some(additional_properties::validate),
        "propertyNames" => Some(property_names::validate),
        "dependentSchemas" => Some(dependent_schemas::validate),
        "dependentRequired" => Some(dependent_required::validate),
        "required" => Some(required::validate),
        "maxProperties" => Some(max_properties::validate),
        "minProperties" => Some(min_properties::validate),

        "prefixItems" => Some(prefix_items::validate),
        "items" => Some(items::validate),
        "contains" => Some(contains::validate),
        "maxItems" => Some(max_items::validate),
        "minItems" => Some(min_items::validate),
        "uniqueItems" => Some(unique_items::validate),

        "type" => Some(type_::validate),
        "const" => Some(const_::validate),
        "enum" => Some(enum_::validate),
        "maximum" => Some(maximum::validate),
        "minimum" => Some(minimum::validate),
        "exclusiveMaximum" => Some(exclusive_maximum::validate),
        "exclusiveMinimum" => Some(exclusive_minimum::validate),
        "multipleOf" => Some(multiple_of::validate),
        "maxLength" => Some(max_length::validate),
        "minLength" => Some(min_length::validate),
        "pattern" => Some(pattern::validate),

        "format" => Some(format::validate),

        // "if" alone has no handler: its effect only shows up through `then`/`else`.
        // "$defs", "$schema", "$comment", "title", "description", ... and any other name not
        // listed above are unrecognized keywords and are ignored by the dispatcher.
        _ => None,
    }
}
