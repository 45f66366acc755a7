//! Owning context for the FormCore resolution engine.
//!
//! [`FormHost`] is the explicitly constructed value tying the engine
//! together: it owns the three registries (UI schemas, renderers, fields)
//! and read-only snapshots of the current (schema, data, ui schema)
//! triple, and it forwards write requests to the surrounding state
//! container through the [`DataSink`] trait.
//!
//! There is deliberately no global instance — lifecycle is tied to whoever
//! constructs the host, typically an application context's init/teardown.
//!
//! All state sits behind one mutex covering the whole
//! register/deregister/resolve surface, so a resolution never observes a
//! half-applied registration.

mod host;
mod sink;

pub use host::FormHost;
pub use sink::{DataSink, DiscardWrites};
