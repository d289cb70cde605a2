//! Mapping of structured errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use changedoc_core::errors::{ChangeDocError, ExError, ExErrorKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Handler error; renders as `{ "error": <message> }`
#[derive(Debug)]
pub struct ApiError(pub ExError);

pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::InputUnresolved
        | ExErrorKind::InvalidInput
        | ExErrorKind::AcquisitionFailed => StatusCode::BAD_REQUEST,
        ExErrorKind::ExternalService => StatusCode::BAD_GATEWAY,
        ExErrorKind::AdvisoryUnavailable
        | ExErrorKind::AdvisoryMalformed
        | ExErrorKind::ProjectionDegenerate
        | ExErrorKind::Serialization
        | ExErrorKind::Io
        | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl From<ChangeDocError> for ApiError {
    fn from(err: ChangeDocError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind());
        let body = ErrorEnvelope {
            error: self.0.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
