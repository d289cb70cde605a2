use serde_json::{json, Value};

/// A single template entry pointing at an entity with labels
#[allow(dead_code)]
pub fn entity_entry(property: &str, id: &str, labels: Value, rank: &str) -> Value {
    json!({
        "mainsnak": {
            "property": property,
            "datatype": "wikibase-item",
            "datavalue": {"value": {"id": id, "labels": labels}}
        },
        "rank": rank
    })
}

/// A single template entry carrying a scalar value
#[allow(dead_code)]
pub fn scalar_entry(property: &str, datatype: &str, value: Value, rank: &str) -> Value {
    json!({
        "mainsnak": {
            "property": property,
            "datatype": datatype,
            "datavalue": {"value": value}
        },
        "rank": rank
    })
}

/// The P31 template used throughout the scenarios
#[allow(dead_code)]
pub fn p31_template() -> Value {
    json!({
        "P31": [entity_entry("P31", "Q5", json!({"en": "human", "fr": "humain"}), "normal")]
    })
}

#[allow(dead_code)]
pub fn change(file: &str, path: &str, after: Value) -> Value {
    json!({"file": file, "path": path, "before": null, "after": after})
}
