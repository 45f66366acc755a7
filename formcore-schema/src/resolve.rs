//! Schema-space path resolution.

use formcore_types::{Path, Segment};
use serde_json::Value;

/// Walks a schema tree following `path`, returning the addressed fragment.
///
/// Schema-space paths index the schema JSON directly (`properties/<name>`
/// are literal keys), with one special case: an `items` segment
/// dereferences either the single element schema or, for tuple schemas,
/// expects the following segment to be the position inside the tuple.
///
/// Missing keys, out-of-range positions, and shape mismatches all yield
/// `None` — absence is normal control flow, never an error.
#[must_use]
pub fn resolve_schema<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut node = root;
    let mut segments = path.segments().iter();
    while let Some(segment) = segments.next() {
        node = match segment {
            Segment::Key(key) if key == "items" => match node.get("items")? {
                Value::Array(tuple) => match segments.next() {
                    Some(Segment::Index(position)) => tuple.get(*position)?,
                    // A terminal `items` over a tuple addresses the tuple
                    // sequence itself.
                    None => node.get("items")?,
                    Some(Segment::Key(_)) => return None,
                },
                single => single,
            },
            Segment::Key(key) => node.get(key)?,
            Segment::Index(position) => node.as_array()?.get(*position)?,
        };
    }
    Some(node)
}
