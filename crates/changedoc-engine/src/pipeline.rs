//! Generation pipeline
//!
//! ```text
//! ResolvedRequest ─┬─ multi_tables + projectable ──> projector ──> Report
//!                  └─ otherwise ──> [acquire] ──> advisory ──> normalizer
//! ```
//!
//! The deterministic path never consults the advisory, so it works without
//! any generation backend configured.

use crate::acquire::RepositoryAcquirer;
use crate::advisory::{Advisory, AdvisoryRequest};
use crate::request::{RequestInput, ResolvedRequest};
use changedoc_core::errors::{ChangeDocError, Result};
use changedoc_core::model::{GeneratedReport, OutputMode, Report};
use changedoc_core::normalize::normalize_advisory;
use changedoc_core::projection::{changes_report, template_report};
use changedoc_core::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;

/// The request cannot be answered by a projector alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotProjectable;

/// Project `input` without the advisory when `output` allows it.
///
/// Only `multi_tables` is deterministic, and only for a template mapping or
/// a change list.
pub fn plan_deterministic(
    input: &RequestInput,
    output: OutputMode,
) -> std::result::Result<Report, NotProjectable> {
    if output != OutputMode::MultiTables {
        return Err(NotProjectable);
    }
    match input {
        RequestInput::Template(Value::Object(template)) => Ok(template_report(template)),
        RequestInput::Changes {
            records,
            title,
            description,
        } => Ok(changes_report(records, title.as_ref(), description.as_ref())),
        _ => Err(NotProjectable),
    }
}

/// Produce the report for a resolved request.
///
/// # Errors
///
/// Acquisition failures for `git_url` inputs, and whatever the advisory
/// reports (`AdvisoryUnavailable`, `AdvisoryTransport`). Malformed advisory
/// replies are repaired, never returned.
pub async fn generate(
    request: ResolvedRequest,
    advisory: &dyn Advisory,
    acquirer: &RepositoryAcquirer,
) -> Result<GeneratedReport> {
    let start = Instant::now();
    let input_kind = request.input.kind();
    let output_mode = request.output.as_str();
    log_op_start!(
        "generate",
        input_kind = input_kind,
        output_mode = output_mode,
        advisory = advisory.name()
    );

    match generate_inner(request, advisory, acquirer).await {
        Ok(report) => {
            log_op_end!(
                "generate",
                duration_ms = start.elapsed().as_millis() as u64,
                input_kind = input_kind,
                output_mode = output_mode
            );
            Ok(report)
        }
        Err(e) => {
            log_op_error!(
                "generate",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                input_kind = input_kind
            );
            Err(e)
        }
    }
}

async fn generate_inner(
    request: ResolvedRequest,
    advisory: &dyn Advisory,
    acquirer: &RepositoryAcquirer,
) -> Result<GeneratedReport> {
    if let Ok(report) = plan_deterministic(&request.input, request.output) {
        return Ok(report.into());
    }

    let payload = match request.input {
        RequestInput::GitUrl(url) => serde_json::to_value(acquirer.acquire_async(url).await?)?,
        other => other.advisory_payload().ok_or_else(|| ChangeDocError::Internal {
            message: format!("no advisory payload for {} input", other.kind()),
        })?,
    };

    let mode = request.output.advisory_mode();
    let raw = advisory
        .generate(&AdvisoryRequest::new(mode, payload))
        .await?;
    Ok(normalize_advisory(&raw, mode))
}
