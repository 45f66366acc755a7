//! Schema-side primitives for FormCore.
//!
//! The engine receives fully dereferenced JSON Schema trees as plain
//! `serde_json::Value`s and never validates them — it only needs to *read*
//! them. This crate provides:
//! - [`SchemaNode`] — a typed, borrowed view over one schema fragment
//! - [`walk`] — one-level enumeration of a fragment's children with their
//!   composed scope suffixes
//! - [`resolve_schema`] — schema-space path resolution, including the
//!   single-vs-tuple `items` distinction
//!
//! Cyclic `$ref` graphs are a collaborator concern: callers must hand over
//! already-dereferenced, acyclic trees.

mod node;
mod resolve;
mod walker;

pub use node::{Items, SchemaNode};
pub use resolve::resolve_schema;
pub use walker::{Walk, walk};
