//! Canonical schema constants for structured logging
//!
//! Every log event emitted through the `log_op_*` macros uses these keys so
//! that operators can filter on them regardless of which crate emitted it.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Projection sizes
pub const FIELD_TABLE_COUNT: &str = "table_count";
pub const FIELD_FILE_COUNT: &str = "file_count";

// Request routing
pub const FIELD_INPUT_KIND: &str = "input_kind";
pub const FIELD_OUTPUT_MODE: &str = "output_mode";
pub const FIELD_ADVISORY: &str = "advisory";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_REPAIRED: &str = "repaired";
