//! Renderer/field candidate registry: sentinel match is an explicit
//! "unsupported combination" error.

use crate::error::ResolveError;
use crate::registry::{Registry, Resolution};
use crate::tester::{ResolveContext, Tester};
use formcore_types::UiSchemaElement;
use serde_json::Value;

/// Registry of widget candidates (renderers, fields).
///
/// The candidate type is opaque to the core — rendering layers instantiate
/// this with whatever identifies a widget on their side. Unlike UI-schema
/// resolution there is nothing to synthesize when no entry applies, so the
/// fallback surfaces [`ResolveError::NoCandidate`].
pub struct CandidateRegistry<T: PartialEq> {
    inner: Registry<T>,
}

impl<T: PartialEq> Default for CandidateRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> CandidateRegistry<T> {
    /// Creates an empty registry (sentinel only).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Registry::new(),
        }
    }

    /// Number of registered candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no candidates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Registers a candidate.
    pub fn register(&mut self, candidate: T, tester: Tester) {
        self.inner.register(candidate, tester);
    }

    /// Removes candidates matching `(candidate, tester)` exactly.
    pub fn deregister(&mut self, candidate: &T, tester: &Tester) {
        self.inner.deregister(candidate, tester);
    }

    /// Returns the best candidate for rendering `element` against `schema`.
    pub fn resolve(
        &self,
        element: Option<&UiSchemaElement>,
        schema: &Value,
        root: Option<&Value>,
    ) -> Result<&T, ResolveError> {
        let context = element.map_or(ResolveContext::None, ResolveContext::Element);
        match self.inner.find_best(&context, schema, root) {
            Resolution::Match(candidate) => Ok(candidate),
            Resolution::Fallback => Err(ResolveError::no_candidate(element, schema)),
        }
    }
}
