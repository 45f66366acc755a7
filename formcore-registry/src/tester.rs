//! Tester signature and scoring verdicts.

use formcore_types::{Path, UiSchemaElement};
use serde_json::Value;
use std::sync::Arc;

/// A tester's verdict for one schema/context combination.
///
/// `NotApplicable` is data, not an error: it is the tester's explicit
/// "I do not handle this" signal and simply removes the entry from the
/// running selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// The entry does not handle this combination.
    NotApplicable,
    /// The entry applies with the given priority; higher wins.
    Applicable(i32),
}

impl Rank {
    /// The priority, when applicable.
    #[must_use]
    pub fn priority(self) -> Option<i32> {
        match self {
            Self::NotApplicable => None,
            Self::Applicable(p) => Some(p),
        }
    }

    /// True unless the verdict is `NotApplicable`.
    #[must_use]
    pub fn is_applicable(self) -> bool {
        matches!(self, Self::Applicable(_))
    }
}

/// What a tester is being asked about, beyond the schema fragment itself.
///
/// UI-schema resolution evaluates a schema-space scope; renderer and field
/// resolution evaluate a concrete UI-schema element. Either may be absent.
#[derive(Debug, Clone, Copy)]
pub enum ResolveContext<'a> {
    /// No additional context.
    None,
    /// The UI-schema element a widget is being selected for.
    Element(&'a UiSchemaElement),
    /// The schema-space scope a UI schema is being selected for.
    Scope(&'a Path),
}

impl<'a> ResolveContext<'a> {
    /// The element under consideration, when the context carries one.
    #[must_use]
    pub fn element(&self) -> Option<&'a UiSchemaElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The scope under consideration: either the context's own scope or
    /// the scope of the context element (for controls).
    #[must_use]
    pub fn scope(&self) -> Option<&'a Path> {
        match self {
            Self::Scope(path) => Some(path),
            Self::Element(element) => element.scope(),
            Self::None => None,
        }
    }
}

/// A scoring predicate: `(context, schema, root schema) -> Rank`.
///
/// Testers must be deterministic and side-effect-free; resolution may call
/// them any number of times. They are shared (`Arc`) because deregistration
/// identifies a tester by reference identity, mirroring how the same
/// tester value is passed to both `register` and `deregister`.
pub type Tester =
    Arc<dyn Fn(&ResolveContext<'_>, &Value, Option<&Value>) -> Rank + Send + Sync + 'static>;

/// Wraps a closure into a shareable [`Tester`].
#[must_use]
pub fn tester<F>(f: F) -> Tester
where
    F: Fn(&ResolveContext<'_>, &Value, Option<&Value>) -> Rank + Send + Sync + 'static,
{
    Arc::new(f)
}
