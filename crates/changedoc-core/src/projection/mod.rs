//! Deterministic projections of structured input into table reports
//!
//! Both projectors are pure: same input, same output, no advisory call.
//! Malformed sub-structures degrade to empty cells; nothing here fails.

pub mod changes;
pub mod template;

pub use changes::{changes_report, project_changes};
pub use template::{project_template, project_template_table, template_report};
