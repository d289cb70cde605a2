//! Rendering of loosely-typed JSON values into cell text

use serde_json::Value;

/// Text for a table cell: strings as-is, null as empty, anything else as
/// compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Serialized form: strings as-is, everything else (null included) as
/// compact JSON.
pub fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `cell_text` for an optional value; absent renders as empty.
pub fn opt_cell_text(value: Option<&Value>) -> String {
    value.map(cell_text).unwrap_or_default()
}

/// Presence test used for request fields and fallbacks: null, `false`, zero,
/// and empty strings/arrays/objects count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_variants() {
        assert_eq!(cell_text(&json!("human")), "human");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_json_text_keeps_null_and_non_ascii() {
        assert_eq!(json_text(&json!(null)), "null");
        assert_eq!(json_text(&json!("humain")), "humain");
        assert_eq!(json_text(&json!({"fr": "défini"})), r#"{"fr":"défini"}"#);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([1])));
    }
}
