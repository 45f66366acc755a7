//! Core type definitions for FormCore.
//!
//! This crate defines the fundamental, widget-agnostic types used throughout
//! the resolution engine:
//! - [`Path`] — JSON-Pointer-like location inside a data or schema tree
//! - [`Segment`] — a single path step (object key or array index)
//! - [`UiSchemaElement`] — the tagged UI-description tree (controls, layouts)
//!
//! Everything widget-specific (text inputs, date pickers, dialogs) belongs
//! to the rendering layer consuming this crate, not here.

mod path;
mod uischema;

pub use path::{Path, PathError, Segment, resolve};
pub use uischema::{Options, UiSchemaElement};
