//! ChangeDoc Core - deterministic change-report engine
//!
//! Pure, synchronous transformations from loosely-typed change descriptions
//! into strict report contracts:
//! - Template projection: nested property records → one table per key
//! - Change-set projection: flat before/after records → one table per file
//! - Advisory normalization: untrusted generator text → canonical report
//!
//! Nothing in this crate performs I/O or talks to the network.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod projection;

/// Re-exported so the logging macros resolve schema constants from any crate
pub use changedoc_core_types as core_types;

pub use errors::{ChangeDocError, ExError, ExErrorKind, Result};
pub use model::{
    AdvisoryMode, ChangeType, FileChangeEntry, GeneratedReport, OutputMode, Report, ReportBody,
    SummaryReport, Table,
};
pub use normalize::normalize_advisory;
pub use projection::{changes_report, template_report};
