//! Request resolution
//!
//! A request body may carry several input fields at once. Exactly one is
//! used, first match wins: `report`, `git_url`, `template`, `changes`.
//! `report`, `git_url` and `template` must be truthy; `changes` must be a
//! list (an empty list is accepted).

use changedoc_core::errors::{ChangeDocError, Result};
use changedoc_core::model::text::is_truthy;
use changedoc_core::model::OutputMode;
use serde_json::{Map, Value};

/// The single input a request resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum RequestInput {
    /// Pre-computed change report, handed to the advisory verbatim
    Report(Value),
    /// Repository to clone and diff
    GitUrl(String),
    /// Template mapping, or raw template text when it was not JSON
    Template(Value),
    /// Flat change records with optional report labels
    Changes {
        records: Vec<Value>,
        title: Option<Value>,
        description: Option<Value>,
    },
}

impl RequestInput {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            RequestInput::Report(_) => "report",
            RequestInput::GitUrl(_) => "git_url",
            RequestInput::Template(_) => "template",
            RequestInput::Changes { .. } => "changes",
        }
    }

    /// The payload object the advisory receives
    ///
    /// `GitUrl` has no payload of its own; it is replaced by the acquired
    /// diff before the advisory is consulted.
    pub fn advisory_payload(&self) -> Option<Value> {
        let mut payload = Map::new();
        match self {
            RequestInput::Report(report) => {
                payload.insert("report".into(), report.clone());
            }
            RequestInput::GitUrl(_) => return None,
            RequestInput::Template(template) => {
                payload.insert("template".into(), template.clone());
            }
            RequestInput::Changes {
                records,
                title,
                description,
            } => {
                payload.insert("changes".into(), Value::Array(records.clone()));
                payload.insert("title".into(), title.clone().unwrap_or(Value::Null));
                payload.insert(
                    "description".into(),
                    description.clone().unwrap_or(Value::Null),
                );
            }
        }
        Some(Value::Object(payload))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub input: RequestInput,
    pub output: OutputMode,
}

/// Parse raw body bytes, then resolve.
///
/// A body that is not JSON, or JSON that is neither an object nor null, is
/// rejected with `InvalidRequestBody`.
pub fn resolve_body(body: &[u8]) -> Result<ResolvedRequest> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ChangeDocError::InvalidRequestBody {
            reason: e.to_string(),
        })?;
    resolve_request(&value)
}

/// Select the input and output mode for a parsed request body.
///
/// `null` reads as an empty object.
pub fn resolve_request(body: &Value) -> Result<ResolvedRequest> {
    let empty = Map::new();
    let fields = match body {
        Value::Object(fields) => fields,
        Value::Null => &empty,
        other => {
            return Err(ChangeDocError::InvalidRequestBody {
                reason: format!("expected a JSON object, got {}", value_kind(other)),
            })
        }
    };

    let output = OutputMode::parse_lenient(fields.get("output").and_then(Value::as_str));
    let input = resolve_input(fields)?;

    Ok(ResolvedRequest { input, output })
}

fn resolve_input(fields: &Map<String, Value>) -> Result<RequestInput> {
    if let Some(report) = truthy(fields, "report") {
        return Ok(RequestInput::Report(report.clone()));
    }

    if let Some(git_url) = truthy(fields, "git_url") {
        return match git_url {
            Value::String(url) => Ok(RequestInput::GitUrl(url.clone())),
            other => Err(ChangeDocError::InvalidRequestBody {
                reason: format!("git_url must be a string, got {}", value_kind(other)),
            }),
        };
    }

    if let Some(template) = truthy(fields, "template") {
        return Ok(RequestInput::Template(parse_template(template)));
    }

    if let Some(Value::Array(records)) = fields.get("changes") {
        return Ok(RequestInput::Changes {
            records: records.clone(),
            title: fields.get("title").cloned(),
            description: fields.get("description").cloned(),
        });
    }

    Err(ChangeDocError::InputUnresolved)
}

/// Template text is parsed as JSON when that yields something non-null;
/// otherwise the text is kept as-is.
fn parse_template(template: &Value) -> Value {
    match template {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) | Err(_) => template.clone(),
            Ok(parsed) => parsed,
        },
        other => other.clone(),
    }
}

fn truthy<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| is_truthy(v))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
