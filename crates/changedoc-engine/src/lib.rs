//! ChangeDoc Engine - request orchestration
//!
//! Coordinates the pure projections in `changedoc-core` with the two
//! collaborators that perform I/O: repository acquisition (git) and the
//! text-generation advisory.

pub mod acquire;
pub mod advisory;
pub mod pipeline;
pub mod request;

pub use acquire::{AcquiredDiff, JsonFile, RepositoryAcquirer};
pub use advisory::{Advisory, AdvisoryRequest};
pub use pipeline::{generate, plan_deterministic, NotProjectable};
pub use request::{resolve_request, RequestInput, ResolvedRequest};
