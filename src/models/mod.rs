//! Shared data models for lint responses, known results, and run reports.

pub mod baseline;
pub mod finding;

use serde::Serialize;
use std::collections::BTreeMap;

/// Observed warning counts keyed by finding name.
pub type AggregateCount = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Outcome of comparing one finding name against the known results.
pub enum Entry {
    Match {
        name: String,
        count: u64,
    },
    CountMismatch {
        name: String,
        found: u64,
        expected: u64,
    },
    /// Present in the current run but absent from the known results.
    Unknown { name: String, found: u64 },
    /// Present in the known results but absent from the current run.
    Missing { name: String, expected: u64 },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Match { name, .. }
            | Entry::CountMismatch { name, .. }
            | Entry::Unknown { name, .. }
            | Entry::Missing { name, .. } => name,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        !matches!(self, Entry::Match { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated run summary used by printers.
pub struct Summary {
    pub files: usize,
    pub invocations: usize,
    pub warnings: u64,
    pub mismatches: usize,
    /// Coarse verdict: any disagreement with the known results.
    pub drift: bool,
}

#[derive(Debug, Clone, Serialize)]
/// Full result of one harness run.
pub struct RunReport {
    pub entries: Vec<Entry>,
    pub summary: Summary,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        !self.summary.drift
    }
}
