//! Schema contracts
//!
//! Output shapes (`Report`, `Table`, `FileChangeEntry`, `SummaryReport`) are
//! strict serde types. Input records (`TemplateEntry`, `ChangeRecord`) are
//! borrowed views over `serde_json::Value` with an explicit default for every
//! optional path, because the inputs are loosely typed.

pub mod input;
pub mod mode;
pub mod report;
pub mod text;

pub use input::{ChangeRecord, DataValue, EntityRef, TemplateEntry};
pub use mode::{AdvisoryMode, OutputMode};
pub use report::{
    ChangeType, FileChangeEntry, GeneratedReport, Report, ReportBody, SummaryReport, Table,
};
pub use text::{cell_text, is_truthy, json_text};
