//! Priority-based dispatch for FormCore.
//!
//! Everything pluggable in the engine — UI-schema definitions, renderer
//! candidates, field candidates — is selected the same way: a [`Registry`]
//! holds (candidate, tester) pairs, every tester scores the current
//! schema/context, and the highest score wins. A permanent sentinel entry
//! at priority 0 guarantees there is always a winner; what the sentinel
//! *means* differs per specialization:
//! - [`UiSchemaRegistry`] — sentinel match triggers default layout
//!   synthesis
//! - [`CandidateRegistry`] — sentinel match surfaces
//!   [`ResolveError::NoCandidate`]
//!
//! Testers are pure scoring predicates. A tester that panics is caught,
//! logged, and treated as not applicable so one bad registration cannot
//! take down resolution for everyone else.

mod candidates;
mod error;
mod registry;
mod tester;
pub mod testers;
mod uischema;

pub use candidates::CandidateRegistry;
pub use error::ResolveError;
pub use registry::{Registry, Resolution};
pub use tester::{Rank, ResolveContext, Tester, tester};
pub use uischema::UiSchemaRegistry;
