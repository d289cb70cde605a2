//! Gemini-style `generateContent` backend

use super::{Advisory, AdvisoryRequest};
use async_trait::async_trait;
use changedoc_core::errors::{ChangeDocError, Result};
use changedoc_core::{log_op_end, log_op_error, log_op_start};
use changedoc_core_types::Sensitive;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct GenaiConfig {
    pub api_key: Sensitive<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GenaiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Sensitive::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GenaiAdvisory {
    http_client: reqwest::Client,
    config: GenaiConfig,
}

impl GenaiAdvisory {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built (TLS backend unavailable).
    pub fn new(config: GenaiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChangeDocError::Internal {
                message: format!("HTTP client: {e}"),
            })?;
        Ok(Self {
            http_client,
            config,
        })
    }

    async fn call(&self, prompt: String) -> Result<String> {
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let response = self
            .http_client
            .post(self.config.endpoint())
            .header("x-goog-api-key", self.config.api_key.expose().as_str())
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(ChangeDocError::AdvisoryTransport {
                message: format!("{} returned {}: {}", self.config.model, status, text),
            });
        }

        Ok(match serde_json::from_str::<Value>(&text) {
            Ok(reply) => reply_text(&reply).unwrap_or(text),
            Err(_) => text,
        })
    }
}

#[async_trait]
impl Advisory for GenaiAdvisory {
    fn name(&self) -> &'static str {
        "genai"
    }

    async fn generate(&self, request: &AdvisoryRequest) -> Result<String> {
        let start = Instant::now();
        log_op_start!(
            "advisory_generate",
            advisory = self.name(),
            mode = request.mode.as_str()
        );

        match self.call(request.prompt()).await {
            Ok(text) => {
                log_op_end!(
                    "advisory_generate",
                    duration_ms = start.elapsed().as_millis() as u64,
                    reply_len = text.len()
                );
                Ok(text)
            }
            Err(e) => {
                log_op_error!(
                    "advisory_generate",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }
}

fn transport(err: reqwest::Error) -> ChangeDocError {
    ChangeDocError::AdvisoryTransport {
        message: err.to_string(),
    }
}

/// Concatenated `text` parts of the first candidate, if any
pub fn reply_text(reply: &Value) -> Option<String> {
    let parts = reply
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
