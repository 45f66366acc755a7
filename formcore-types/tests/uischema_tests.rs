use formcore_types::{Path, UiSchemaElement};
use pretty_assertions::assert_eq;
use serde_json::json;

fn scope(text: &str) -> Path {
    Path::parse(text).unwrap()
}

// ── JSON encoding ────────────────────────────────────────────────

#[test]
fn control_serializes_with_scope_convention() {
    let control = UiSchemaElement::control(scope("#/properties/name"));
    assert_eq!(
        serde_json::to_value(&control).unwrap(),
        json!({"type": "Control", "scope": "#/properties/name"})
    );
}

#[test]
fn layout_round_trips() {
    let layout = UiSchemaElement::vertical(vec![
        UiSchemaElement::labeled_control(scope("#/properties/name"), "Name"),
        UiSchemaElement::Label {
            text: "hint".to_string(),
        },
    ]);
    let encoded = serde_json::to_value(&layout).unwrap();
    assert_eq!(encoded["type"], "VerticalLayout");
    let decoded: UiSchemaElement = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, layout);
}

#[test]
fn deserializes_external_ui_schema() {
    let decoded: UiSchemaElement = serde_json::from_value(json!({
        "type": "HorizontalLayout",
        "elements": [
            {"type": "Control", "label": "1", "scope": "#/properties/firstarray"}
        ]
    }))
    .unwrap();
    assert_eq!(decoded.elements().len(), 1);
    assert_eq!(
        decoded.elements()[0].scope(),
        Some(&scope("#/properties/firstarray"))
    );
    assert_eq!(decoded.elements()[0].label(), Some("1"));
}

#[test]
fn layout_without_elements_field_decodes_empty() {
    let decoded: UiSchemaElement =
        serde_json::from_value(json!({"type": "VerticalLayout"})).unwrap();
    assert_eq!(decoded, UiSchemaElement::vertical(vec![]));
}

#[test]
fn options_survive_round_trip() {
    let encoded = json!({
        "type": "Control",
        "scope": "#/properties/body",
        "options": {"multi": true}
    });
    let decoded: UiSchemaElement = serde_json::from_value(encoded.clone()).unwrap();
    assert_eq!(decoded.option("multi"), Some(&json!(true)));
    assert_eq!(serde_json::to_value(&decoded).unwrap(), encoded);
}

#[test]
fn group_and_categorization_decode() {
    let decoded: UiSchemaElement = serde_json::from_value(json!({
        "type": "Categorization",
        "elements": [
            {"type": "Category", "label": "Basics", "elements": [
                {"type": "Control", "scope": "#/properties/name"}
            ]}
        ]
    }))
    .unwrap();
    assert!(decoded.is_layout());
    assert_eq!(decoded.elements()[0].label(), Some("Basics"));
}

// ── accessors ────────────────────────────────────────────────────

#[test]
fn scope_is_none_for_layouts() {
    assert_eq!(UiSchemaElement::vertical(vec![]).scope(), None);
}

#[test]
fn elements_is_empty_for_controls() {
    let c = UiSchemaElement::control(scope("#"));
    assert!(c.elements().is_empty());
    assert!(!c.is_layout());
}

#[test]
fn group_carries_label() {
    let g = UiSchemaElement::group("Address", vec![]);
    assert_eq!(g.label(), Some("Address"));
}
