//! Canonical output shapes

use serde::{Deserialize, Serialize};

pub const DEFAULT_ADVISORY_TITLE: &str = "AI Documentation";

/// A named (or, inside a single-table report, anonymous) table of strings
///
/// Rows are fitted to the column count on insertion, so every row of every
/// `Table` has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn named(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: Some(name.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn unnamed(columns: Vec<String>) -> Self {
        Self {
            name: None,
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, truncating or padding with empty cells to fit.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.columns.len())
    }
}

/// Kind of change applied to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
    Renamed,
    #[default]
    Unknown,
}

impl ChangeType {
    /// Case-insensitive match; anything unrecognised is `Unknown`.
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "added" => ChangeType::Added,
            "removed" => ChangeType::Removed,
            "modified" => ChangeType::Modified,
            "renamed" => ChangeType::Renamed,
            _ => ChangeType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeEntry {
    pub file: String,
    #[serde(rename = "changeType")]
    pub change_type: ChangeType,
    pub changes: Vec<String>,
    pub notes: String,
}

/// Section carried by a report, serialized as a sibling of `title`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportBody {
    Tables(Vec<Table>),
    Table(Table),
    Files(Vec<FileChangeEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub body: ReportBody,
}

impl Report {
    pub fn tables(title: impl Into<String>, description: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: ReportBody::Tables(tables),
        }
    }

    pub fn table(title: impl Into<String>, description: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: ReportBody::Table(table),
        }
    }

    pub fn files(
        title: impl Into<String>,
        description: impl Into<String>,
        files: Vec<FileChangeEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: ReportBody::Files(files),
        }
    }

    /// Every table the report carries, whichever variant it is
    pub fn all_tables(&self) -> Vec<&Table> {
        match &self.body {
            ReportBody::Tables(tables) => tables.iter().collect(),
            ReportBody::Table(table) => vec![table],
            ReportBody::Files(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub description: String,
}

/// Value placed under `result` in a success envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedReport {
    Report(Report),
    Summary(SummaryReport),
}

impl From<Report> for GeneratedReport {
    fn from(report: Report) -> Self {
        GeneratedReport::Report(report)
    }
}

impl From<SummaryReport> for GeneratedReport {
    fn from(summary: SummaryReport) -> Self {
        GeneratedReport::Summary(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_push_row_fits_to_columns() {
        let mut table = Table::unnamed(vec!["a".into(), "b".into()]);
        table.push_row(vec!["1".into()]);
        table.push_row(vec!["1".into(), "2".into(), "3".into()]);
        assert_eq!(table.rows, vec![vec!["1", ""], vec!["1", "2"]]);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_single_table_report_shape() {
        let mut table = Table::unnamed(vec!["Text".into()]);
        table.push_row(vec!["hello".into()]);
        let report = Report::table("T", "D", table);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"title": "T", "description": "D", "table": {"columns": ["Text"], "rows": [["hello"]]}})
        );
    }

    #[test]
    fn test_files_report_shape_uses_camel_case_change_type() {
        let report = Report::files(
            "T",
            "",
            vec![FileChangeEntry {
                file: "b.py".into(),
                change_type: ChangeType::Modified,
                changes: vec![],
                notes: String::new(),
            }],
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["files"][0]["changeType"], json!("modified"));
    }

    #[test]
    fn test_generated_report_deserializes_both_variants() {
        let full: GeneratedReport =
            serde_json::from_value(json!({"title": "T", "description": "", "files": []})).unwrap();
        assert!(matches!(full, GeneratedReport::Report(_)));

        let summary: GeneratedReport = serde_json::from_value(json!({"description": "x"})).unwrap();
        assert_eq!(
            summary,
            GeneratedReport::Summary(SummaryReport {
                description: "x".into()
            })
        );
    }

    #[test]
    fn test_change_type_lenient() {
        assert_eq!(ChangeType::parse_lenient("Renamed"), ChangeType::Renamed);
        assert_eq!(ChangeType::parse_lenient("deleted"), ChangeType::Unknown);
    }
}
