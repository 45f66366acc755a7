use formcore_schema::SchemaNode;
use formcore_types::UiSchemaElement;
use serde_json::Value;

/// Errors surfaced by candidate resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Every registered entry (and there may be none) declared itself not
    /// applicable: no usable widget exists for this schema/uischema
    /// combination. The rendering layer decides what to show instead.
    #[error("no applicable candidate for schema type '{schema_type}' at scope '{scope}'")]
    NoCandidate { schema_type: String, scope: String },
}

impl ResolveError {
    pub(crate) fn no_candidate(element: Option<&UiSchemaElement>, schema: &Value) -> Self {
        Self::NoCandidate {
            schema_type: SchemaNode::new(schema)
                .schema_type()
                .unwrap_or("unknown")
                .to_string(),
            scope: element
                .and_then(UiSchemaElement::scope)
                .map_or_else(|| "#".to_string(), |s| s.scope_string()),
        }
    }
}
