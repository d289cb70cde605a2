//! Output mode selection

use serde::{Deserialize, Serialize};

/// Requested output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Per-file change summaries
    #[default]
    Files,
    /// Single advisory-generated table
    Table,
    /// Deterministic per-key / per-file tables
    MultiTables,
    /// Description only
    Summary,
}

impl OutputMode {
    /// Unrecognised selectors fall back to document mode.
    pub fn parse_lenient(selector: Option<&str>) -> Self {
        match selector.map(str::trim) {
            Some("table") => OutputMode::Table,
            Some("multi_tables") => OutputMode::MultiTables,
            Some("summary") => OutputMode::Summary,
            _ => OutputMode::Files,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Files => "files",
            OutputMode::Table => "table",
            OutputMode::MultiTables => "multi_tables",
            OutputMode::Summary => "summary",
        }
    }

    /// Shape requested from the advisory when this mode goes down the
    /// best-effort path. `multi_tables` degrades to a single table.
    pub fn advisory_mode(&self) -> AdvisoryMode {
        match self {
            OutputMode::Files => AdvisoryMode::Document,
            OutputMode::Table | OutputMode::MultiTables => AdvisoryMode::Table,
            OutputMode::Summary => AdvisoryMode::Summary,
        }
    }
}

/// Shape the advisory normalizer coerces into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryMode {
    Table,
    Document,
    Summary,
}

impl AdvisoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryMode::Table => "table",
            AdvisoryMode::Document => "files",
            AdvisoryMode::Summary => "summary",
        }
    }
}
