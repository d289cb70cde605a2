//! Request correlation
//!
//! Each inbound request gets a fresh `RequestId`; it is attached to the
//! tracing span, structured errors, and the `x-request-id` response header.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single generate request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adopt an id supplied by a caller (for example an inbound header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request context, stored in the request extensions by the server
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a caller-supplied id when present, otherwise mint one
    pub fn from_header(value: Option<&str>) -> Self {
        let request_id = match value.map(str::trim) {
            Some(id) if !id.is_empty() => RequestId::from_string(id.to_string()),
            _ => RequestId::new(),
        };
        Self { request_id }
    }
}
