//! A typed view over one JSON Schema fragment.

use serde_json::Value;

/// Borrowed, copyable view exposing the schema attributes the engine cares
/// about. Anything else in the fragment is carried along untouched.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

/// The `items` declaration of an array schema.
#[derive(Debug, Clone, Copy)]
pub enum Items<'a> {
    /// One schema applied to every element.
    Single(SchemaNode<'a>),
    /// Tuple schema: one entry per position.
    Tuple(&'a [Value]),
}

impl<'a> SchemaNode<'a> {
    /// Wraps a schema fragment.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The declared `type`, when present as a string.
    #[must_use]
    pub fn schema_type(&self) -> Option<&'a str> {
        self.value.get("type").and_then(Value::as_str)
    }

    /// True when the fragment declares `type: "object"`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.schema_type() == Some("object")
    }

    /// True when the fragment declares `type: "array"`.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.schema_type() == Some("array")
    }

    /// Iterates `(name, child)` over declared properties in declaration
    /// order. Empty when `properties` is absent or not an object.
    pub fn properties(&self) -> impl Iterator<Item = (&'a str, SchemaNode<'a>)> {
        self.value
            .get("properties")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|props| props.iter().map(|(k, v)| (k.as_str(), SchemaNode::new(v))))
    }

    /// True when at least one property is declared.
    #[must_use]
    pub fn has_properties(&self) -> bool {
        self.value
            .get("properties")
            .and_then(Value::as_object)
            .is_some_and(|props| !props.is_empty())
    }

    /// True when a `properties` object is declared at all, even if empty.
    #[must_use]
    pub fn declares_properties(&self) -> bool {
        self.value
            .get("properties")
            .and_then(Value::as_object)
            .is_some()
    }

    /// The `items` declaration, distinguishing single from tuple form.
    #[must_use]
    pub fn items(&self) -> Option<Items<'a>> {
        match self.value.get("items")? {
            Value::Array(tuple) => Some(Items::Tuple(tuple)),
            single => Some(Items::Single(SchemaNode::new(single))),
        }
    }

    /// The declared `format`, when present.
    #[must_use]
    pub fn format(&self) -> Option<&'a str> {
        self.value.get("format").and_then(Value::as_str)
    }

    /// The declared `enum` values, when present.
    #[must_use]
    pub fn enum_values(&self) -> Option<&'a [Value]> {
        self.value.get("enum").and_then(Value::as_array).map(Vec::as_slice)
    }
}
