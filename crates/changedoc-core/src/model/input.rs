//! Borrowed views over loosely-typed input records
//!
//! Nothing here fails: a field of the wrong shape reads as absent, and every
//! accessor documents what absent means.

use serde_json::{Map, Value};

/// A `mainsnak`-style template entry
///
/// ```text
/// { mainsnak: { property, datatype, datavalue: { value } }, rank }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry<'a> {
    pub property: Option<&'a Value>,
    pub datatype: Option<&'a Value>,
    pub datavalue: DataValue<'a>,
    pub rank: Option<&'a Value>,
}

/// The `datavalue` slot of an assertion
#[derive(Debug, Clone, Copy)]
pub enum DataValue<'a> {
    /// No `datavalue` key, or the key holds null
    Missing,
    /// A mapping; `value` is its `value` key when present
    Container {
        container: &'a Map<String, Value>,
        value: Option<&'a Value>,
    },
    /// Something that is not a mapping (string, number, list)
    Bare(&'a Value),
}

/// An identified value carrying per-language labels
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    pub id: Option<&'a Value>,
    pub labels: Option<&'a Map<String, Value>>,
}

impl<'a> TemplateEntry<'a> {
    pub fn from_value(entry: &'a Value) -> Self {
        let mainsnak = entry.get("mainsnak").and_then(Value::as_object);
        let datavalue = match mainsnak.and_then(|m| m.get("datavalue")) {
            None | Some(Value::Null) => DataValue::Missing,
            Some(Value::Object(container)) => DataValue::Container {
                container,
                value: container.get("value"),
            },
            Some(other) => DataValue::Bare(other),
        };

        Self {
            property: mainsnak.and_then(|m| m.get("property")),
            datatype: mainsnak.and_then(|m| m.get("datatype")),
            datavalue,
            rank: entry.get("rank"),
        }
    }

    /// The entity reference, when `datavalue.value` is a mapping
    pub fn entity(&self) -> Option<EntityRef<'a>> {
        match self.datavalue {
            DataValue::Container {
                value: Some(Value::Object(value)),
                ..
            } => Some(EntityRef {
                id: value.get("id"),
                labels: value.get("labels").and_then(Value::as_object),
            }),
            _ => None,
        }
    }
}

/// A flat before/after change record
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeRecord<'a> {
    pub file: Option<&'a Value>,
    pub path: Option<&'a Value>,
    pub before: Option<&'a Value>,
    pub after: Option<&'a Value>,
}

impl<'a> ChangeRecord<'a> {
    /// Non-mapping records read as a record with every field absent.
    pub fn from_value(record: &'a Value) -> Self {
        match record.as_object() {
            Some(obj) => Self {
                file: obj.get("file"),
                path: obj.get("path"),
                before: obj.get("before"),
                after: obj.get("after"),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_entry_view() {
        let raw = json!({
            "mainsnak": {
                "property": "P31",
                "datatype": "wikibase-item",
                "datavalue": {"value": {"id": "Q5", "labels": {"en": "human"}}}
            },
            "rank": "normal"
        });
        let entry = TemplateEntry::from_value(&raw);
        let entity = entry.entity().expect("entity");
        assert_eq!(entity.id, Some(&json!("Q5")));
        assert_eq!(entity.labels.map(|l| l.len()), Some(1));
        assert_eq!(entry.rank, Some(&json!("normal")));
    }

    #[test]
    fn test_scalar_entry_has_no_entity() {
        let raw = json!({"mainsnak": {"datavalue": {"value": "1969-07-20"}}});
        let entry = TemplateEntry::from_value(&raw);
        assert!(entry.entity().is_none());
        assert!(matches!(
            entry.datavalue,
            DataValue::Container { value: Some(_), .. }
        ));
    }

    #[test]
    fn test_malformed_entry_reads_as_absent() {
        let raw = json!("not an entry");
        let entry = TemplateEntry::from_value(&raw);
        assert!(entry.property.is_none());
        assert!(matches!(entry.datavalue, DataValue::Missing));
    }

    #[test]
    fn test_change_record_from_non_object() {
        let value = json!(7);
        let record = ChangeRecord::from_value(&value);
        assert!(record.file.is_none() && record.after.is_none());
    }
}
