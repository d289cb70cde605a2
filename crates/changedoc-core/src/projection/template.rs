//! Template → one table per top-level key
//!
//! Columns are discovered from the data: every language code found under
//! `mainsnak.datavalue.value.labels` becomes a column, sorted so that the
//! schema does not depend on entry order. Keys whose entries carry no entity
//! structure at all get the scalar layout instead.

use crate::errors::ExErrorKind;
use crate::model::input::{DataValue, TemplateEntry};
use crate::model::report::{Report, Table};
use crate::model::text::{json_text, opt_cell_text};
use crate::{log_op_end, log_op_repaired, log_op_start};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::time::Instant;

pub const TEMPLATE_REPORT_TITLE: &str = "Template Tables";
pub const TEMPLATE_REPORT_DESCRIPTION: &str =
    "Structured view of template entries by top-level key.";

const BASE_COLUMNS: [&str; 3] = ["property", "datatype", "id"];
const RANK_COLUMN: &str = "rank";
const SCALAR_COLUMNS: [&str; 4] = ["property", "datatype", "datavalue", "rank"];

/// Project every sequence-valued key of `template` into a table.
///
/// Keys whose value is not a sequence are skipped. Table order follows key
/// order in the mapping.
pub fn project_template(template: &Map<String, Value>) -> Vec<Table> {
    let start = Instant::now();
    log_op_start!("project_template", key_count = template.len());

    let tables: Vec<Table> = template
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_array()
                .map(|entries| project_template_table(key, entries))
        })
        .collect();

    log_op_end!(
        "project_template",
        duration_ms = start.elapsed().as_millis() as u64,
        table_count = tables.len()
    );
    tables
}

/// Wrap [`project_template`] in the multi-table report.
pub fn template_report(template: &Map<String, Value>) -> Report {
    Report::tables(
        TEMPLATE_REPORT_TITLE,
        TEMPLATE_REPORT_DESCRIPTION,
        project_template(template),
    )
}

/// Project the entries under one key into a table named `name`.
pub fn project_template_table(name: &str, entries: &[Value]) -> Table {
    let views: Vec<TemplateEntry<'_>> = entries.iter().map(TemplateEntry::from_value).collect();
    let lang_cols = discover_language_columns(&views);

    let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(lang_cols.iter().cloned());
    columns.push(RANK_COLUMN.to_string());

    let mut table = Table::named(name, columns);
    for entry in &views {
        table.push_row(entity_row(entry, &lang_cols));
    }

    // No labels anywhere and no id in any row: the key holds scalar values.
    let has_id = table.rows.iter().any(|row| !row[2].is_empty());
    if lang_cols.is_empty() && !has_id {
        log_op_repaired!(
            "project_template",
            ExErrorKind::ProjectionDegenerate,
            format!("key {name} has no entity structure; using scalar layout")
        );
        return scalar_table(name, &views);
    }

    table
}

/// Distinct language codes across all entries, sorted.
fn discover_language_columns(entries: &[TemplateEntry<'_>]) -> Vec<String> {
    let mut langs = BTreeSet::new();
    for entry in entries {
        if let Some(labels) = entry.entity().and_then(|e| e.labels) {
            langs.extend(labels.keys().cloned());
        }
    }
    langs.into_iter().collect()
}

fn entity_row(entry: &TemplateEntry<'_>, lang_cols: &[String]) -> Vec<String> {
    let entity = entry.entity();
    let labels = entity.and_then(|e| e.labels);

    let mut row = Vec::with_capacity(lang_cols.len() + 4);
    row.push(opt_cell_text(entry.property));
    row.push(opt_cell_text(entry.datatype));
    row.push(opt_cell_text(entity.and_then(|e| e.id)));
    for lang in lang_cols {
        row.push(opt_cell_text(labels.and_then(|l| l.get(lang))));
    }
    row.push(opt_cell_text(entry.rank));
    row
}

fn scalar_table(name: &str, entries: &[TemplateEntry<'_>]) -> Table {
    let mut table = Table::named(name, SCALAR_COLUMNS.iter().map(|c| c.to_string()).collect());
    for entry in entries {
        table.push_row(vec![
            opt_cell_text(entry.property),
            opt_cell_text(entry.datatype),
            datavalue_text(&entry.datavalue),
            opt_cell_text(entry.rank),
        ]);
    }
    table
}

/// The raw value as text, or the whole container when it has no `value`.
fn datavalue_text(datavalue: &DataValue<'_>) -> String {
    match datavalue {
        DataValue::Missing => Value::Null.to_string(),
        DataValue::Container {
            value: Some(value), ..
        } => json_text(value),
        DataValue::Container {
            container,
            value: None,
        } => Value::Object((*container).clone()).to_string(),
        DataValue::Bare(value) => json_text(value),
    }
}
