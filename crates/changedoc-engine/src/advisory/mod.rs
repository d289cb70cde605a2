//! Text-generation advisory
//!
//! The advisory is an injected capability: callers hold an
//! `Arc<dyn Advisory>` chosen once at wiring time. Its reply is untrusted
//! text; the pipeline always passes it through the normalizer.

pub mod echo;
pub mod genai;
pub mod prompt;

pub use echo::{EchoAdvisory, UnconfiguredAdvisory};
pub use genai::{GenaiAdvisory, GenaiConfig};

use async_trait::async_trait;
use changedoc_core::errors::Result;
use changedoc_core::model::AdvisoryMode;
use serde_json::Value;

/// One advisory call: the requested shape plus the payload to describe
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryRequest {
    pub mode: AdvisoryMode,
    pub payload: Value,
}

impl AdvisoryRequest {
    pub fn new(mode: AdvisoryMode, payload: Value) -> Self {
        Self { mode, payload }
    }

    /// Mode instructions followed by the compact JSON payload
    pub fn prompt(&self) -> String {
        let mut prompt = prompt::instructions(self.mode).to_string();
        prompt.push_str(&self.payload.to_string());
        prompt
    }
}

#[async_trait]
pub trait Advisory: Send + Sync {
    /// Backend name reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Raw reply text for `request`
    ///
    /// # Errors
    ///
    /// `AdvisoryUnavailable` when the backend is not configured,
    /// `AdvisoryTransport` when the remote call fails.
    async fn generate(&self, request: &AdvisoryRequest) -> Result<String>;
}
