use changedoc_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ChangeDocError
pub type Result<T> = std::result::Result<T, ChangeDocError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code used in logs, tests, and HTTP error
/// envelopes. `AdvisoryMalformed` and `ProjectionDegenerate` are never
/// returned to callers; they only label repair events in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request
    /// No recognised input field in the request
    InputUnresolved,
    /// Request body is not a JSON object
    InvalidInput,

    // Acquisition
    /// Clone, commit count or diff extraction failed
    AcquisitionFailed,

    // Advisory
    /// Generation capability is not configured
    AdvisoryUnavailable,
    /// Generation output was not the expected structure (repaired, not surfaced)
    AdvisoryMalformed,

    // Projection
    /// Template or change data missing expected sub-fields (degraded, not surfaced)
    ProjectionDegenerate,

    // Integration/IO
    ExternalService,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InputUnresolved => "ERR_INPUT_UNRESOLVED",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::AcquisitionFailed => "ERR_ACQUISITION_FAILED",
            ExErrorKind::AdvisoryUnavailable => "ERR_ADVISORY_UNAVAILABLE",
            ExErrorKind::AdvisoryMalformed => "ERR_ADVISORY_MALFORMED",
            ExErrorKind::ProjectionDegenerate => "ERR_PROJECTION_DEGENERATE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the failure is attributable to the caller's request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InputUnresolved
                | ExErrorKind::InvalidInput
                | ExErrorKind::AcquisitionFailed
        )
    }
}

/// Canonical structured error type
///
/// Boundaries (engine, HTTP handlers) convert typed `ChangeDocError`s into
/// this shape so that logging and response mapping only look at `kind`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Caller-facing message, used verbatim in `{ "error": ... }` envelopes
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Typed failures raised by the engine and its adapters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangeDocError {
    // ===== Request =====
    /// None of `report`, `git_url`, `template`, `changes` was usable
    #[error("Provide one of 'report', 'git_url', 'template' or 'changes'")]
    InputUnresolved,

    #[error("Invalid request body: {reason}")]
    InvalidRequestBody { reason: String },

    // ===== Acquisition =====
    #[error("Repository must have at least 2 commits")]
    RepositoryTooShallow { commits: u64 },

    #[error("Git error: {detail}")]
    Git { detail: String },

    #[error("{reason}")]
    Acquisition { reason: String },

    // ===== Advisory =====
    #[error("{reason}")]
    AdvisoryUnavailable { reason: String },

    #[error("Advisory request failed: {message}")]
    AdvisoryTransport { message: String },

    // ===== IO =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ChangeDocError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ChangeDocError::InputUnresolved => ExErrorKind::InputUnresolved,
            ChangeDocError::InvalidRequestBody { .. } => ExErrorKind::InvalidInput,
            ChangeDocError::RepositoryTooShallow { .. }
            | ChangeDocError::Git { .. }
            | ChangeDocError::Acquisition { .. } => ExErrorKind::AcquisitionFailed,
            ChangeDocError::AdvisoryUnavailable { .. } => ExErrorKind::AdvisoryUnavailable,
            ChangeDocError::AdvisoryTransport { .. } => ExErrorKind::ExternalService,
            ChangeDocError::Serialization { .. } => ExErrorKind::Serialization,
            ChangeDocError::Io { .. } => ExErrorKind::Io,
            ChangeDocError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

impl From<ChangeDocError> for ExError {
    fn from(err: ChangeDocError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}

impl From<serde_json::Error> for ChangeDocError {
    fn from(err: serde_json::Error) -> Self {
        ChangeDocError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ChangeDocError {
    fn from(err: std::io::Error) -> Self {
        ChangeDocError::Io {
            message: err.to_string(),
        }
    }
}
