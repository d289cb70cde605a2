//! Total parsing of advisory text

use serde_json::Value;

/// Outcome of reading advisory text as JSON
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryText {
    Parsed(Value),
    /// The text exactly as received
    Unparsed(String),
}

/// Parse `raw` as JSON, tolerating one Markdown code fence around it.
///
/// Never fails; anything that is not JSON comes back as `Unparsed`.
pub fn parse_advisory_text(raw: &str) -> AdvisoryText {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return AdvisoryText::Parsed(value);
    }
    if let Some(inner) = strip_code_fence(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(inner) {
            return AdvisoryText::Parsed(value);
        }
    }
    AdvisoryText::Unparsed(raw.to_string())
}

/// Body of a reply that is exactly one fenced block (```` ```json ... ``` ````).
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let body_start = rest.find('\n')?;
    let body = rest[body_start + 1..].trim_end().strip_suffix("```")?;
    Some(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        assert_eq!(
            parse_advisory_text(" {\"title\": \"x\"}\n"),
            AdvisoryText::Parsed(json!({"title": "x"}))
        );
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"files\": []}\n```";
        assert_eq!(
            parse_advisory_text(raw),
            AdvisoryText::Parsed(json!({"files": []}))
        );
        let bare_fence = "```\n[1, 2]\n```\n";
        assert_eq!(parse_advisory_text(bare_fence), AdvisoryText::Parsed(json!([1, 2])));
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        assert_eq!(
            parse_advisory_text("not json"),
            AdvisoryText::Unparsed("not json".to_string())
        );
        assert_eq!(parse_advisory_text(""), AdvisoryText::Unparsed(String::new()));
        assert_eq!(
            parse_advisory_text("```json\n{broken\n```"),
            AdvisoryText::Unparsed("```json\n{broken\n```".to_string())
        );
    }
}
