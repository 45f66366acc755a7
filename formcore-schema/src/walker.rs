//! One-level schema enumeration.
//!
//! [`walk`] yields each direct child of a schema fragment together with the
//! scope suffix that reaches it (`properties/<name>` for object properties,
//! `items` for an array's element schema). It never recurses: testers only
//! need the immediately relevant nesting level, and the synthesizer builds
//! deeper levels by walking again on the children it chooses to descend
//! into.

use crate::node::SchemaNode;
use formcore_types::Path;
use serde_json::Value;

/// Enumerates the direct children of `schema`.
///
/// - Object schemas (anything declaring `properties`) yield one entry per
///   property, in declaration order.
/// - Array schemas yield a single `items` entry; for tuple schemas the
///   yielded value is the tuple array itself.
/// - Everything else yields nothing.
///
/// The returned iterator is finite and `walk` can be re-invoked on the same
/// fragment to restart it.
#[must_use]
pub fn walk(schema: &Value) -> Walk<'_> {
    let node = SchemaNode::new(schema);
    if node.declares_properties() {
        Walk {
            inner: Inner::Properties(
                schema
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| props.iter()),
            ),
        }
    } else if node.is_array() {
        Walk {
            inner: Inner::Items(schema.get("items")),
        }
    } else {
        Walk { inner: Inner::Items(None) }
    }
}

/// Iterator over `(scope suffix, child fragment)` pairs. See [`walk`].
pub struct Walk<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Properties(Option<serde_json::map::Iter<'a>>),
    Items(Option<&'a Value>),
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Path, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Properties(iter) => {
                let (name, child) = iter.as_mut()?.next()?;
                let suffix = Path::root().join("properties").join(name.as_str());
                Some((suffix, child))
            }
            Inner::Items(slot) => {
                let items = slot.take()?;
                Some((Path::root().join("items"), items))
            }
        }
    }
}
