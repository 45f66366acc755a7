//! UI-schema definition registry: sentinel match triggers synthesis.

use crate::registry::{Registry, Resolution};
use crate::tester::{ResolveContext, Tester};
use formcore_generate::generate_default_ui_schema;
use formcore_types::{Path, UiSchemaElement};
use serde_json::Value;
use tracing::debug;

/// Registry of explicit UI-schema definitions.
///
/// When no registered definition applies to a schema/scope combination the
/// fallback is not an error: a default layout is synthesized on the fly
/// from the schema itself. Synthesized layouts are ephemeral — one per
/// resolution call, never cached here.
#[derive(Default)]
pub struct UiSchemaRegistry {
    inner: Registry<UiSchemaElement>,
}

impl UiSchemaRegistry {
    /// Creates an empty registry (sentinel only).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Registry::new(),
        }
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Registers a UI-schema definition.
    pub fn register(&mut self, definition: UiSchemaElement, tester: Tester) {
        self.inner.register(definition, tester);
    }

    /// Removes definitions matching `(definition, tester)` exactly.
    pub fn deregister(&mut self, definition: &UiSchemaElement, tester: &Tester) {
        self.inner.deregister(definition, tester);
    }

    /// Returns the most applicable UI schema for the fragment at `scope`.
    ///
    /// `schema` is the fragment itself, `root` the whole schema tree (for
    /// testers that need surrounding context). Falls back to synthesizing
    /// a default layout from `schema`.
    #[must_use]
    pub fn resolve(&self, schema: &Value, scope: &Path, root: Option<&Value>) -> UiSchemaElement {
        match self
            .inner
            .find_best(&ResolveContext::Scope(scope), schema, root)
        {
            Resolution::Match(definition) => definition.clone(),
            Resolution::Fallback => {
                debug!(scope = %scope.scope_string(), "no registered ui schema; synthesizing");
                generate_default_ui_schema(schema)
            }
        }
    }
}
