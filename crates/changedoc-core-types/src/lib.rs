//! Types shared by every ChangeDoc crate
//!
//! - **Correlation**: `RequestId`, `RequestContext` for tagging one request's work
//! - **Sensitive data**: `Sensitive<T>` keeps credentials out of logs
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use sensitive::Sensitive;
