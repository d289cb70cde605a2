//! Property tests for the report invariants
//!
//! - every produced table is rectangular
//! - language columns do not depend on entry order
//! - the normalizer is total and idempotent

use changedoc_core::model::{AdvisoryMode, GeneratedReport, Report};
use changedoc_core::normalize::normalize_advisory;
use changedoc_core::projection::{project_changes, project_template_table};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,5}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_labels() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("(en|fr|de|es|ja)", "[a-z]{1,6}", 0..4)
        .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect()))
}

fn arb_template_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        (
            "P[0-9]{1,3}",
            prop::option::of("Q[0-9]{1,3}"),
            arb_labels(),
            "(normal|preferred)"
        )
            .prop_map(|(p, id, labels, rank)| json!({
                "mainsnak": {"property": p, "datatype": "wikibase-item",
                             "datavalue": {"value": {"id": id, "labels": labels}}},
                "rank": rank
            })),
        arb_json(),
    ]
}

fn arb_table_mode() -> impl Strategy<Value = AdvisoryMode> {
    prop_oneof![
        Just(AdvisoryMode::Table),
        Just(AdvisoryMode::Document),
        Just(AdvisoryMode::Summary),
    ]
}

fn full_tables(report: &GeneratedReport) -> Vec<changedoc_core::Table> {
    match report {
        GeneratedReport::Report(r) => r.all_tables().into_iter().cloned().collect(),
        GeneratedReport::Summary(_) => Vec::new(),
    }
}

proptest! {
    #[test]
    fn template_tables_are_rectangular(entries in prop::collection::vec(arb_template_entry(), 0..8)) {
        let table = project_template_table("K", &entries);
        prop_assert!(table.is_rectangular());
    }

    #[test]
    fn language_columns_ignore_entry_order(entries in prop::collection::vec(arb_template_entry(), 1..8)) {
        let forward = project_template_table("K", &entries);
        let mut reversed_entries = entries.clone();
        reversed_entries.reverse();
        let reversed = project_template_table("K", &reversed_entries);
        prop_assert_eq!(forward.columns, reversed.columns);
    }

    #[test]
    fn change_tables_are_rectangular(records in prop::collection::vec(arb_json(), 0..10)) {
        for table in project_changes(&records) {
            prop_assert!(table.is_rectangular());
            prop_assert_eq!(table.columns.len(), 2);
        }
    }

    #[test]
    fn normalizer_is_total_on_text(raw in ".{0,64}", mode in arb_table_mode()) {
        let report = normalize_advisory(&raw, mode);
        for table in full_tables(&report) {
            prop_assert!(table.is_rectangular());
        }
        prop_assert_eq!(matches!(report, GeneratedReport::Summary(_)), mode == AdvisoryMode::Summary);
    }

    #[test]
    fn normalizer_is_total_on_json(value in arb_json(), mode in arb_table_mode()) {
        let report = normalize_advisory(&value.to_string(), mode);
        for table in full_tables(&report) {
            prop_assert!(table.is_rectangular());
        }
    }

    #[test]
    fn normalizer_is_idempotent(value in arb_json(), mode in arb_table_mode()) {
        let once = normalize_advisory(&value.to_string(), mode);
        let text = serde_json::to_string(&once).expect("serialize");
        let twice = normalize_advisory(&text, mode);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalizer_is_idempotent_on_table_shaped_replies(
        columns in prop::collection::vec("[A-Za-z]{1,8}", 0..4),
        rows in prop::collection::vec(prop::collection::vec(arb_scalar(), 0..6), 0..5),
    ) {
        let raw = json!({"title": "T", "description": "D", "table": {"columns": columns, "rows": rows}});
        let once = normalize_advisory(&raw.to_string(), AdvisoryMode::Table);
        let text = serde_json::to_string(&once).expect("serialize");
        prop_assert_eq!(normalize_advisory(&text, AdvisoryMode::Table), once);
    }
}

#[test]
fn canonical_reports_are_fixed_points() {
    let canonical: Vec<(Report, AdvisoryMode)> = vec![
        (
            serde_json::from_value(json!({
                "title": "Release", "description": "",
                "table": {"columns": ["File", "Change"], "rows": [["a.json", "added key"]]}
            }))
            .expect("table report"),
            AdvisoryMode::Table,
        ),
        (
            serde_json::from_value(json!({
                "title": "Release", "description": "notes",
                "files": [{"file": "a.json", "changeType": "renamed", "changes": ["moved"], "notes": ""}]
            }))
            .expect("files report"),
            AdvisoryMode::Document,
        ),
    ];

    for (report, mode) in canonical {
        let text = serde_json::to_string(&report).expect("serialize");
        assert_eq!(normalize_advisory(&text, mode), GeneratedReport::Report(report));
    }
}
