use formcore_schema::resolve_schema;
use formcore_types::Path;
use pretty_assertions::assert_eq;
use serde_json::json;

fn person_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "address": {
                "type": "object",
                "properties": {
                    "street": {"type": "string"}
                }
            },
            "nicknames": {
                "type": "array",
                "items": {"type": "string"}
            },
            "coords": {
                "type": "array",
                "items": [{"type": "number"}, {"type": "number"}, {"type": "string"}]
            }
        }
    })
}

fn at<'a>(schema: &'a serde_json::Value, scope: &str) -> Option<&'a serde_json::Value> {
    resolve_schema(schema, &Path::parse(scope).unwrap())
}

#[test]
fn root_scope_resolves_to_schema_itself() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#"), Some(&schema));
}

#[test]
fn resolves_top_level_property() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#/properties/name"), Some(&json!({"type": "string"})));
}

#[test]
fn resolves_nested_property() {
    let schema = person_schema();
    assert_eq!(
        at(&schema, "#/properties/address/properties/street"),
        Some(&json!({"type": "string"}))
    );
}

#[test]
fn items_dereferences_single_element_schema() {
    let schema = person_schema();
    assert_eq!(
        at(&schema, "#/properties/nicknames/items"),
        Some(&json!({"type": "string"}))
    );
}

#[test]
fn items_with_position_dereferences_tuple_entry() {
    let schema = person_schema();
    assert_eq!(
        at(&schema, "#/properties/coords/items/2"),
        Some(&json!({"type": "string"}))
    );
}

#[test]
fn terminal_items_over_tuple_addresses_the_sequence() {
    let schema = person_schema();
    assert_eq!(
        at(&schema, "#/properties/coords/items"),
        Some(&json!([{"type": "number"}, {"type": "number"}, {"type": "string"}]))
    );
}

#[test]
fn tuple_position_out_of_range_is_none() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#/properties/coords/items/9"), None);
}

#[test]
fn missing_property_is_none() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#/properties/age"), None);
}

#[test]
fn items_on_a_non_array_schema_is_none() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#/properties/name/items"), None);
}

#[test]
fn key_segment_after_tuple_items_is_none() {
    let schema = person_schema();
    assert_eq!(at(&schema, "#/properties/coords/items/properties"), None);
}
