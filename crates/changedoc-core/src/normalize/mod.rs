//! Advisory response normalizer
//!
//! The defensive boundary between the text generator and every consumer.
//! [`normalize_advisory`] is total: any input string yields a report of the
//! requested shape. It is also idempotent: feeding a normalized report back
//! in (as JSON text) returns the same report.

pub mod parse;

pub use parse::{parse_advisory_text, AdvisoryText};

use crate::errors::ExErrorKind;
use crate::model::mode::AdvisoryMode;
use crate::model::report::{
    ChangeType, FileChangeEntry, GeneratedReport, Report, SummaryReport, Table,
    DEFAULT_ADVISORY_TITLE,
};
use crate::model::text::{cell_text, is_truthy, json_text};
use crate::{log_op_end, log_op_repaired, log_op_start};
use serde_json::{Map, Value};
use std::time::Instant;

const FALLBACK_COLUMN: &str = "Text";
const UNKNOWN_FILE: &str = "Unknown";

/// Coerce raw advisory text into the canonical shape for `mode`.
pub fn normalize_advisory(raw: &str, mode: AdvisoryMode) -> GeneratedReport {
    let start = Instant::now();
    log_op_start!("normalize_advisory", mode = mode.as_str(), raw_len = raw.len());

    let report = normalize_text(parse_advisory_text(raw), mode);

    log_op_end!(
        "normalize_advisory",
        duration_ms = start.elapsed().as_millis() as u64,
        mode = mode.as_str()
    );
    report
}

/// Normalize an already-parsed advisory reply.
pub fn normalize_text(text: AdvisoryText, mode: AdvisoryMode) -> GeneratedReport {
    match (text, mode) {
        (AdvisoryText::Unparsed(raw), AdvisoryMode::Summary) => {
            SummaryReport { description: raw }.into()
        }
        (AdvisoryText::Unparsed(raw), mode) => {
            log_op_repaired!(
                "normalize_advisory",
                ExErrorKind::AdvisoryMalformed,
                "reply is not JSON; using raw text"
            );
            unparsed_report(raw, mode).into()
        }
        (AdvisoryText::Parsed(value), AdvisoryMode::Summary) => normalize_summary(&value).into(),
        (AdvisoryText::Parsed(value), mode) => normalize_value(value, mode).into(),
    }
}

fn unparsed_report(raw: String, mode: AdvisoryMode) -> Report {
    match mode {
        AdvisoryMode::Table => {
            let mut table = Table::unnamed(vec![FALLBACK_COLUMN.to_string()]);
            table.push_row(vec![raw.clone()]);
            Report::table(DEFAULT_ADVISORY_TITLE, raw, table)
        }
        _ => Report::files(DEFAULT_ADVISORY_TITLE, raw, Vec::new()),
    }
}

fn normalize_summary(value: &Value) -> SummaryReport {
    let description = match value {
        Value::Object(obj) => obj.get("description").map(cell_text).unwrap_or_default(),
        other => cell_text(other),
    };
    SummaryReport { description }
}

/// Normalize a parsed reply into a table or document report.
///
/// `mode` must not be `Summary`; a summary request is treated as document
/// mode here.
pub fn normalize_value(value: Value, mode: AdvisoryMode) -> Report {
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            log_op_repaired!(
                "normalize_advisory",
                ExErrorKind::AdvisoryMalformed,
                "reply is not an object; wrapping"
            );
            let mut wrapped = Map::new();
            wrapped.insert("title".into(), Value::from(DEFAULT_ADVISORY_TITLE));
            wrapped.insert("description".into(), Value::from(cell_text(&other)));
            wrapped
        }
    };

    let title = match obj.get("title") {
        None | Some(Value::Null) => DEFAULT_ADVISORY_TITLE.to_string(),
        Some(v) => cell_text(v),
    };
    let description = obj.get("description").map(cell_text).unwrap_or_default();

    match mode {
        AdvisoryMode::Table => Report::table(title, description, normalize_table(obj.get("table"))),
        AdvisoryMode::Document | AdvisoryMode::Summary => {
            Report::files(title, description, normalize_files(obj.get("files")))
        }
    }
}

fn normalize_table(table: Option<&Value>) -> Table {
    let table = table.and_then(Value::as_object);

    let columns = match table.and_then(|t| t.get("columns")) {
        Some(Value::Array(cols)) if cols.iter().all(Value::is_string) => {
            cols.iter().map(cell_text).collect()
        }
        _ => {
            log_op_repaired!(
                "normalize_advisory",
                ExErrorKind::AdvisoryMalformed,
                "table.columns is not a list of strings; using [Text]"
            );
            vec![FALLBACK_COLUMN.to_string()]
        }
    };

    let mut normalized = Table::unnamed(columns);
    normalized.name = table
        .and_then(|t| t.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    match table.and_then(|t| t.get("rows")) {
        Some(Value::Array(rows)) if rows.iter().all(Value::is_array) => {
            for row in rows.iter().filter_map(Value::as_array) {
                normalized.push_row(row.iter().map(cell_text).collect());
            }
        }
        None => {}
        Some(_) => {
            log_op_repaired!(
                "normalize_advisory",
                ExErrorKind::AdvisoryMalformed,
                "table.rows is not a list of lists; dropping rows"
            );
        }
    }

    normalized
}

fn normalize_files(files: Option<&Value>) -> Vec<FileChangeEntry> {
    match files {
        Some(Value::Array(entries)) => entries.iter().map(normalize_file_entry).collect(),
        None => Vec::new(),
        Some(_) => {
            log_op_repaired!(
                "normalize_advisory",
                ExErrorKind::AdvisoryMalformed,
                "files is not a list; dropping"
            );
            Vec::new()
        }
    }
}

fn normalize_file_entry(entry: &Value) -> FileChangeEntry {
    let Some(obj) = entry.as_object() else {
        return FileChangeEntry {
            file: UNKNOWN_FILE.to_string(),
            change_type: ChangeType::Unknown,
            changes: vec![cell_text(entry)],
            notes: String::new(),
        };
    };

    let file = first_truthy(obj, &["file", "name"])
        .map(cell_text)
        .unwrap_or_else(|| UNKNOWN_FILE.to_string());
    let change_type = first_truthy(obj, &["changeType", "change_type"])
        .map(|v| ChangeType::parse_lenient(&cell_text(v)))
        .unwrap_or_default();

    let changes = match obj.get("changes") {
        Some(Value::Array(items)) => items.iter().map(cell_text).collect(),
        None | Some(Value::Null) => match obj.get("diff") {
            Some(diff) => vec![json_text(diff)],
            None => Vec::new(),
        },
        Some(other) => vec![cell_text(other)],
    };

    let notes = match obj.get("notes") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => json_text(other),
    };

    FileChangeEntry {
        file,
        change_type,
        changes,
        notes,
    }
}

fn first_truthy<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| is_truthy(v))
}
