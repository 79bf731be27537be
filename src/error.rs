//! Error types for the harness.
//!
//! Every variant aborts the run at the point of detection. Baseline drift is
//! not an error: it is accumulated by `compare::Comparison` and reported in
//! full before the final verdict.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// Config file present but unreadable or invalid
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Baseline file missing or unreadable
    #[error("cannot read known results {path}: {source}")]
    BaselineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Baseline content is not the expected JSON shape
    #[error("known results {path} are not valid JSON: {source}")]
    BaselineParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input certificate unreadable
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure talking to the lint endpoint
    #[error("lint request for {path} failed: {message}")]
    Network { path: PathBuf, message: String },

    /// Lint response is not a JSON array of findings
    #[error("invalid JSON response for {path}: {raw}")]
    ResponseParse { path: PathBuf, raw: String },

    #[error("fatal severity found for {path} ({finding}) in response: {raw}")]
    FatalFinding {
        path: PathBuf,
        finding: String,
        raw: String,
    },

    /// Scanned files and designated-linter invocations disagree
    #[error("mismatch between number of scanned files ({files}) and number of {linter} invocations ({invocations})")]
    CountMismatch {
        files: usize,
        invocations: usize,
        linter: String,
    },

    #[error("error walking {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}
