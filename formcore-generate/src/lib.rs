//! Default UI-schema synthesis.
//!
//! When no registered UI-schema definition applies to a schema fragment,
//! the engine builds a layout on the fly: a vertical stack of controls in
//! property declaration order, recursing into nested object schemas so
//! sibling controls keep their declared grouping.
//!
//! Synthesis is a pure function of the schema — equal schemas in, equal
//! trees out. Results are ephemeral; callers that synthesize on every
//! render are expected to memoize externally.

mod layout;

pub use layout::generate_default_ui_schema;
