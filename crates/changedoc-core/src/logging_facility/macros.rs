//! Canonical logging macros
//!
//! Every operation boundary in the workspace logs through these so that
//! `component`, `op` and `event` are always present.

/// Log the start of an operation
///
/// ```
/// # use changedoc_core::log_op_start;
/// log_op_start!("project_template");
/// log_op_start!("project_template", entry_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use changedoc_core::log_op_end;
/// log_op_end!("project_template", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is consumed and converted into an `ExError`.
///
/// ```
/// # use changedoc_core::log_op_error;
/// # use changedoc_core::errors::ChangeDocError;
/// log_op_error!("resolve_request", ChangeDocError::InputUnresolved, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
            $($field)*
        );
    }};
}

/// Log a silent repair of degraded input
///
/// Used where a failure kind is absorbed instead of surfaced.
///
/// ```
/// # use changedoc_core::log_op_repaired;
/// # use changedoc_core::errors::ExErrorKind;
/// log_op_repaired!("normalize_advisory", ExErrorKind::AdvisoryMalformed, "table.rows reset");
/// ```
#[macro_export]
macro_rules! log_op_repaired {
    ($op:expr, $kind:expr, $detail:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_REPAIRED,
            err.code = $kind.code(),
            detail = %$detail,
        );
    };
}
