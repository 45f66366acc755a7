use formcore_types::Path;
use serde_json::Value;

/// Receives the write requests the engine computes.
///
/// The core decides *what* path and *what* new value, never performs the
/// mutation itself — the surrounding state container owns the data tree
/// and serializes all writes. Implementations typically enqueue the
/// request on that container's dispatch queue.
pub trait DataSink: Send + Sync {
    /// Requests that `value` be written at the data-space `path`.
    fn write(&self, path: &Path, value: &Value);
}

/// Sink that drops every write request, for read-only hosts and tests.
#[derive(Debug, Default)]
pub struct DiscardWrites;

impl DataSink for DiscardWrites {
    fn write(&self, _path: &Path, _value: &Value) {}
}
