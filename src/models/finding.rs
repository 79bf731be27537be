//! Lint service response schema.

use serde::Deserialize;

/// Severity reported for findings that must abort the run.
pub const FATAL: &str = "fatal";
/// Severity whose finding names are tallied against the baseline.
pub const WARNING: &str = "warning";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
/// A single result returned by the lint endpoint.
pub struct Finding {
    #[serde(rename = "Severity", alias = "severity", default)]
    pub severity: String,
    #[serde(rename = "Finding", alias = "finding", default)]
    pub finding: String,
    #[serde(rename = "Linter", alias = "linter", default)]
    pub linter: String,
}

impl Finding {
    pub fn is_fatal(&self) -> bool {
        self.severity == FATAL
    }

    pub fn is_warning(&self) -> bool {
        self.severity == WARNING
    }
}
