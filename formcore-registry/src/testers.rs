//! Tester combinators.
//!
//! Building blocks for the common dispatch patterns: rank a constant
//! priority when a predicate holds, match on schema type or format, match
//! on the scope under evaluation, or combine predicates. A typical
//! registration reads
//!
//! ```
//! use formcore_registry::testers::{all_of, format_is, rank_with, schema_type_is};
//!
//! let date_control = rank_with(4, all_of(vec![
//!     schema_type_is("string"),
//!     format_is("date"),
//! ]));
//! ```

use crate::tester::{Rank, ResolveContext, Tester};
use formcore_schema::SchemaNode;
use formcore_types::Path;
use serde_json::Value;
use std::sync::Arc;

/// A boolean predicate over the same inputs a tester sees.
pub type Predicate =
    Arc<dyn Fn(&ResolveContext<'_>, &Value, Option<&Value>) -> bool + Send + Sync + 'static>;

/// Wraps a closure into a shareable [`Predicate`].
#[must_use]
pub fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&ResolveContext<'_>, &Value, Option<&Value>) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Tester ranking `priority` when `pred` holds, not applicable otherwise.
#[must_use]
pub fn rank_with(priority: i32, pred: Predicate) -> Tester {
    Arc::new(move |ctx, schema, root| {
        if pred(ctx, schema, root) {
            Rank::Applicable(priority)
        } else {
            Rank::NotApplicable
        }
    })
}

/// Holds when the context element is a control.
#[must_use]
pub fn is_control() -> Predicate {
    predicate(|ctx, _, _| ctx.element().is_some_and(|el| el.scope().is_some()))
}

/// Holds when the evaluated schema declares the given `type`.
#[must_use]
pub fn schema_type_is(expected: &str) -> Predicate {
    let expected = expected.to_string();
    predicate(move |_, schema, _| SchemaNode::new(schema).schema_type() == Some(expected.as_str()))
}

/// Holds when the evaluated schema declares the given `format`.
#[must_use]
pub fn format_is(expected: &str) -> Predicate {
    let expected = expected.to_string();
    predicate(move |_, schema, _| SchemaNode::new(schema).format() == Some(expected.as_str()))
}

/// Holds when the evaluated schema declares an `enum`.
#[must_use]
pub fn has_enum() -> Predicate {
    predicate(|_, schema, _| SchemaNode::new(schema).enum_values().is_some())
}

/// Holds when an arbitrary check on the schema fragment passes.
#[must_use]
pub fn schema_matches<F>(f: F) -> Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    predicate(move |_, schema, _| f(schema))
}

/// Holds when the scope under evaluation ends with the given key.
#[must_use]
pub fn scope_ends_with(key: &str) -> Predicate {
    let key = key.to_string();
    predicate(move |ctx, _, _| ctx.scope().is_some_and(|scope| scope.ends_with_key(&key)))
}

/// Holds when the scope under evaluation equals `scope` exactly.
#[must_use]
pub fn scope_equals(scope: Path) -> Predicate {
    predicate(move |ctx, _, _| ctx.scope() == Some(&scope))
}

/// Holds when the context element carries option `key` equal to `value`.
#[must_use]
pub fn option_is(key: &str, value: Value) -> Predicate {
    let key = key.to_string();
    predicate(move |ctx, _, _| {
        ctx.element()
            .and_then(|el| el.option(&key))
            .is_some_and(|v| v == &value)
    })
}

/// Holds when every predicate holds.
#[must_use]
pub fn all_of(preds: Vec<Predicate>) -> Predicate {
    predicate(move |ctx, schema, root| preds.iter().all(|p| p(ctx, schema, root)))
}

/// Holds when at least one predicate holds.
#[must_use]
pub fn any_of(preds: Vec<Predicate>) -> Predicate {
    predicate(move |ctx, schema, root| preds.iter().any(|p| p(ctx, schema, root)))
}
