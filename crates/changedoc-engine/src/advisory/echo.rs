//! Offline advisory backends

use super::{Advisory, AdvisoryRequest};
use async_trait::async_trait;
use changedoc_core::errors::{ChangeDocError, Result};
use changedoc_core::model::report::DEFAULT_ADVISORY_TITLE;
use serde_json::{json, Value};

/// Reflects the payload's top-level keys back without calling anything.
///
/// The reply carries a `table` and an empty `files` list so that every
/// mode normalizes cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoAdvisory;

#[async_trait]
impl Advisory for EchoAdvisory {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn generate(&self, request: &AdvisoryRequest) -> Result<String> {
        let keys: Vec<&str> = match &request.payload {
            Value::Object(fields) => fields.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        let reply = json!({
            "title": DEFAULT_ADVISORY_TITLE,
            "description": format!(
                "Advisory generation is not configured. Input keys: {}",
                keys.join(", ")
            ),
            "table": {
                "columns": ["Input key"],
                "rows": keys.iter().map(|k| vec![*k]).collect::<Vec<_>>(),
            },
            "files": [],
        });
        Ok(reply.to_string())
    }
}

/// Stands in when no API key is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAdvisory;

pub const UNCONFIGURED_REASON: &str = "GENAI_API_KEY not configured";

#[async_trait]
impl Advisory for UnconfiguredAdvisory {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    async fn generate(&self, _request: &AdvisoryRequest) -> Result<String> {
        Err(ChangeDocError::AdvisoryUnavailable {
            reason: UNCONFIGURED_REASON.to_string(),
        })
    }
}
