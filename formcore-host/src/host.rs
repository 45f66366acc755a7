//! The form host: registries + snapshots behind one lock.

use crate::sink::{DataSink, DiscardWrites};
use formcore_registry::{CandidateRegistry, ResolveError, Tester, UiSchemaRegistry};
use formcore_schema::resolve_schema;
use formcore_types::{Path, UiSchemaElement, resolve};
use serde_json::Value;
use std::sync::Mutex;
use tracing::{debug, info};

struct State<R: Clone + PartialEq, F: Clone + PartialEq> {
    schema: Value,
    data: Value,
    ui_schema: Option<UiSchemaElement>,
    ui_schemas: UiSchemaRegistry,
    renderers: CandidateRegistry<R>,
    fields: CandidateRegistry<F>,
}

/// Owns the resolution engine's mutable state for one form.
///
/// `R` and `F` identify renderer and field candidates on the embedder's
/// side; they are cloned out of the host on resolution, so cheap handles
/// (ids, `Arc`ed components) are the expected shape.
///
/// Every operation takes the single internal mutex for its whole duration.
/// `find_best` therefore always sees a fully applied registration set, and
/// the host is `Send + Sync` without further ceremony.
pub struct FormHost<R: Clone + PartialEq, F: Clone + PartialEq> {
    state: Mutex<State<R, F>>,
    sink: Box<dyn DataSink>,
}

impl<R: Clone + PartialEq, F: Clone + PartialEq> FormHost<R, F> {
    /// Creates a host over a schema/data snapshot, discarding writes.
    #[must_use]
    pub fn new(schema: Value, data: Value) -> Self {
        Self::with_sink(schema, data, Box::new(DiscardWrites))
    }

    /// Creates a host forwarding write requests to `sink`.
    #[must_use]
    pub fn with_sink(schema: Value, data: Value, sink: Box<dyn DataSink>) -> Self {
        info!("form host created");
        Self {
            state: Mutex::new(State {
                schema,
                data,
                ui_schema: None,
                ui_schemas: UiSchemaRegistry::new(),
                renderers: CandidateRegistry::new(),
                fields: CandidateRegistry::new(),
            }),
            sink,
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State<R, F>> {
        self.state.lock().expect("form host lock poisoned")
    }

    // ================================================================
    // Snapshots
    // ================================================================

    /// Replaces the schema snapshot.
    pub fn replace_schema(&self, schema: Value) {
        self.state().schema = schema;
    }

    /// Replaces the data snapshot.
    pub fn replace_data(&self, data: Value) {
        self.state().data = data;
    }

    /// Sets or clears the explicit root UI schema.
    pub fn replace_ui_schema(&self, ui_schema: Option<UiSchemaElement>) {
        self.state().ui_schema = ui_schema;
    }

    /// The value at a data-space path, if present.
    #[must_use]
    pub fn data_at(&self, path: &Path) -> Option<Value> {
        let state = self.state();
        resolve(&state.data, path).cloned()
    }

    /// The schema fragment at a schema-space path, if present.
    #[must_use]
    pub fn schema_at(&self, scope: &Path) -> Option<Value> {
        let state = self.state();
        resolve_schema(&state.schema, scope).cloned()
    }

    // ================================================================
    // UI schemas
    // ================================================================

    /// Registers an explicit UI-schema definition.
    pub fn register_ui_schema(&self, definition: UiSchemaElement, tester: Tester) {
        debug!("registering ui schema definition");
        self.state().ui_schemas.register(definition, tester);
    }

    /// Removes a UI-schema definition registered as `(definition, tester)`.
    pub fn deregister_ui_schema(&self, definition: &UiSchemaElement, tester: &Tester) {
        self.state().ui_schemas.deregister(definition, tester);
    }

    /// The UI schema for the fragment at `scope`.
    ///
    /// An explicitly supplied root UI schema wins at the root scope;
    /// otherwise the registry resolves (synthesizing a default layout when
    /// nothing applies). `None` only when `scope` does not address a
    /// fragment of the current schema.
    #[must_use]
    pub fn ui_schema_for(&self, scope: &Path) -> Option<UiSchemaElement> {
        let state = self.state();
        if scope.is_root() {
            if let Some(explicit) = &state.ui_schema {
                return Some(explicit.clone());
            }
        }
        let fragment = resolve_schema(&state.schema, scope)?;
        Some(state.ui_schemas.resolve(fragment, scope, Some(&state.schema)))
    }

    // ================================================================
    // Renderers / fields
    // ================================================================

    /// Registers a renderer candidate.
    pub fn register_renderer(&self, candidate: R, tester: Tester) {
        debug!("registering renderer candidate");
        self.state().renderers.register(candidate, tester);
    }

    /// Removes a renderer registered as `(candidate, tester)`.
    pub fn deregister_renderer(&self, candidate: &R, tester: &Tester) {
        self.state().renderers.deregister(candidate, tester);
    }

    /// Registers a field candidate.
    pub fn register_field(&self, candidate: F, tester: Tester) {
        debug!("registering field candidate");
        self.state().fields.register(candidate, tester);
    }

    /// Removes a field registered as `(candidate, tester)`.
    pub fn deregister_field(&self, candidate: &F, tester: &Tester) {
        self.state().fields.deregister(candidate, tester);
    }

    /// The best renderer for `element`.
    ///
    /// The schema fragment handed to testers is the one addressed by the
    /// element's scope, falling back to the root schema for scope-less
    /// elements.
    pub fn renderer_for(&self, element: &UiSchemaElement) -> Result<R, ResolveError> {
        let state = self.state();
        let fragment = fragment_for(element, &state.schema);
        state
            .renderers
            .resolve(Some(element), fragment, Some(&state.schema))
            .map(Clone::clone)
    }

    /// The best field for `element`. Same contract as
    /// [`FormHost::renderer_for`].
    pub fn field_for(&self, element: &UiSchemaElement) -> Result<F, ResolveError> {
        let state = self.state();
        let fragment = fragment_for(element, &state.schema);
        state
            .fields
            .resolve(Some(element), fragment, Some(&state.schema))
            .map(Clone::clone)
    }

    // ================================================================
    // Writes
    // ================================================================

    /// Forwards a write request to the configured sink.
    ///
    /// The snapshot is left untouched; it changes only when the state
    /// container round-trips the mutation back via
    /// [`FormHost::replace_data`].
    pub fn request_write(&self, path: &Path, value: &Value) {
        debug!(path = %path, "write requested");
        self.sink.write(path, value);
    }
}

/// The schema fragment an element binds to, or the root schema when the
/// element has no scope (layouts, labels) or the scope dangles.
fn fragment_for<'a>(element: &UiSchemaElement, schema: &'a Value) -> &'a Value {
    element
        .scope()
        .and_then(|scope| resolve_schema(schema, scope))
        .unwrap_or(schema)
}
