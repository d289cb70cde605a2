//! HTTP routes

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use changedoc_core::model::GeneratedReport;
use changedoc_core::{ChangeDocError, ExError};
use changedoc_core_types::RequestContext;
use changedoc_engine::advisory::Advisory;
use changedoc_engine::pipeline;
use changedoc_engine::request::resolve_body;
use changedoc_engine::RepositoryAcquirer;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// State shared across handlers
pub struct AppState {
    pub advisory: Arc<dyn Advisory>,
    pub acquirer: RepositoryAcquirer,
}

impl AppState {
    pub fn new(advisory: Arc<dyn Advisory>, acquirer: RepositoryAcquirer) -> Self {
        Self { advisory, acquirer }
    }
}

type AppStateArc = Arc<AppState>;

#[derive(Debug, Serialize)]
pub struct ResultEnvelope {
    pub result: GeneratedReport,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub advisory: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/healthz", get(healthz))
        .with_state(Arc::new(state))
        .layer(middleware::from_fn(request_context))
        .layer(TraceLayer::new_for_http())
}

/// Tag the request with an id, run it inside a span carrying that id and
/// echo the id back in `x-request-id`.
async fn request_context(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_header(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let header = HeaderValue::from_str(ctx.request_id.as_str()).ok();
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).instrument(span).await;
    if let Some(header) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, header);
    }
    response
}

async fn generate(
    State(state): State<AppStateArc>,
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let with_id =
        |err: ChangeDocError| ApiError(ExError::from(err).with_request_id(ctx.request_id.clone()));

    let request = resolve_body(&body).map_err(with_id)?;
    let report = pipeline::generate(request, state.advisory.as_ref(), &state.acquirer)
        .await
        .map_err(with_id)?;

    Ok(Json(ResultEnvelope { result: report }))
}

async fn healthz(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        advisory: state.advisory.name(),
    })
}
