//! Change records → one table per originating file

use crate::model::input::ChangeRecord;
use crate::model::report::{Report, Table};
use crate::model::text::{cell_text, json_text, opt_cell_text};
use crate::{log_op_end, log_op_start};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;

pub const CHANGES_REPORT_TITLE: &str = "JSON Changes";
pub const CHANGES_REPORT_DESCRIPTION: &str = "Only the new values after changes.";
pub const UNNAMED_FILE_TABLE: &str = "Changes";

const CHANGE_COLUMNS: [&str; 2] = ["Path", "New Value"];

/// Group records by `file`, first-seen order, one `[Path, New Value]` table
/// per group.
pub fn project_changes(records: &[Value]) -> Vec<Table> {
    let start = Instant::now();
    log_op_start!("project_changes", record_count = records.len());

    let mut tables: Vec<Table> = Vec::new();
    let mut index_by_file: HashMap<String, usize> = HashMap::new();

    for raw in records {
        let record = ChangeRecord::from_value(raw);
        let file = opt_cell_text(record.file);
        let slot = *index_by_file.entry(file.clone()).or_insert_with(|| {
            let name = if file.is_empty() {
                UNNAMED_FILE_TABLE.to_string()
            } else {
                file
            };
            tables.push(Table::named(
                name,
                CHANGE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            ));
            tables.len() - 1
        });

        tables[slot].push_row(vec![
            opt_cell_text(record.path),
            json_text(record.after.unwrap_or(&Value::Null)),
        ]);
    }

    log_op_end!(
        "project_changes",
        duration_ms = start.elapsed().as_millis() as u64,
        table_count = tables.len()
    );
    tables
}

/// Wrap [`project_changes`] in the multi-table report. Empty or absent
/// `title`/`description` fall back to the defaults.
pub fn changes_report(records: &[Value], title: Option<&Value>, description: Option<&Value>) -> Report {
    Report::tables(
        text_or(title, CHANGES_REPORT_TITLE),
        text_or(description, CHANGES_REPORT_DESCRIPTION),
        project_changes(records),
    )
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    let text = value.map(cell_text).unwrap_or_default();
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn test_single_record() {
        let tables = project_changes(&records(json!([{"file": "a.json", "path": "/x", "after": 42}])));
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name.as_deref(), Some("a.json"));
        assert_eq!(tables[0].columns, vec!["Path", "New Value"]);
        assert_eq!(tables[0].rows, vec![vec!["/x", "42"]]);
    }

    #[test]
    fn test_grouping_keeps_first_seen_file_order() {
        let tables = project_changes(&records(json!([
            {"file": "b.json", "path": "/1", "after": "one"},
            {"file": "a.json", "path": "/2", "after": {"k": [1, 2]}},
            {"file": "b.json", "path": "/3", "after": null}
        ])));
        let names: Vec<_> = tables.iter().filter_map(|t| t.name.as_deref()).collect();
        assert_eq!(names, vec!["b.json", "a.json"]);
        assert_eq!(tables[0].rows, vec![vec!["/1", "one"], vec!["/3", "null"]]);
        assert_eq!(tables[1].rows, vec![vec!["/2", r#"{"k":[1,2]}"#]]);
    }

    #[test]
    fn test_missing_file_groups_under_changes() {
        let tables = project_changes(&records(json!([
            {"path": "/a", "after": true},
            {"file": "", "path": "/b"},
            {"file": null, "path": "/c", "after": 1.5},
            "garbage"
        ])));
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name.as_deref(), Some(UNNAMED_FILE_TABLE));
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["/a", "true"],
                vec!["/b", "null"],
                vec!["/c", "1.5"],
                vec!["", "null"]
            ]
        );
    }

    #[test]
    fn test_report_defaults_apply_to_empty_title() {
        let report = changes_report(&[], Some(&json!("")), None);
        assert_eq!(report.title, CHANGES_REPORT_TITLE);
        assert_eq!(report.description, CHANGES_REPORT_DESCRIPTION);

        let report = changes_report(&[], Some(&json!("Release 4.2")), Some(&json!("Config drift")));
        assert_eq!(report.title, "Release 4.2");
        assert_eq!(report.description, "Config drift");
    }
}
