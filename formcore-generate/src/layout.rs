//! Layout synthesis over a schema tree.

use formcore_schema::{SchemaNode, walk};
use formcore_types::{Path, Segment, UiSchemaElement};
use heck::ToTitleCase;
use serde_json::Value;

/// Builds the default UI schema for `schema`.
///
/// - Non-object schemas, and objects that declare no `properties` mapping
///   at all, get a single control scoped at the root (`#`).
/// - Object schemas with a `properties` mapping get a vertical layout with
///   one entry per property in declaration order: nested objects that have
///   properties of their own recurse into a nested vertical layout (their
///   structure is preserved, not flattened); everything else — primitives,
///   arrays, property-less objects — becomes a control.
/// - An object with an empty `properties` mapping yields an empty vertical
///   layout, which is valid and renders nothing.
///
/// Controls carry a label derived from the property name (`firstName` →
/// `First Name`); the root control carries none.
#[must_use]
pub fn generate_default_ui_schema(schema: &Value) -> UiSchemaElement {
    let node = SchemaNode::new(schema);
    if node.is_object() && node.declares_properties() {
        generate_layout(schema, &Path::root())
    } else {
        UiSchemaElement::control(Path::root())
    }
}

fn generate_layout(schema: &Value, prefix: &Path) -> UiSchemaElement {
    let mut elements = Vec::new();
    for (suffix, child) in walk(schema) {
        let scope = prefix.compose(&suffix);
        let child_node = SchemaNode::new(child);
        if child_node.is_object() && child_node.has_properties() {
            elements.push(generate_layout(child, &scope));
        } else {
            let label = suffix.last().and_then(Segment::as_key).map(derive_label);
            elements.push(UiSchemaElement::Control {
                scope,
                label,
                options: Default::default(),
            });
        }
    }
    UiSchemaElement::vertical(elements)
}

/// `camelCase`/`snake_case` property names become spaced Title Case.
fn derive_label(name: &str) -> String {
    name.to_title_case()
}
