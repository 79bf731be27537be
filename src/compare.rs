//! Comparison of the current run against the known results.
//!
//! Disagreements accumulate instead of aborting; the caller gets every entry
//! plus one coarse verdict.

use crate::models::baseline::KnownResults;
use crate::models::{AggregateCount, Entry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub entries: Vec<Entry>,
}

impl Comparison {
    /// True when any entry disagrees with the known results.
    pub fn has_mismatch(&self) -> bool {
        self.entries.iter().any(Entry::is_mismatch)
    }

    pub fn mismatch_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_mismatch()).count()
    }
}

/// Diff observed counts against the known results.
///
/// Entries for observed names come first, followed by known names that were
/// not observed.
pub fn compare(current: &AggregateCount, known: &KnownResults) -> Comparison {
    let mut entries: Vec<Entry> = current
        .iter()
        .map(|(name, &found)| match known.get(name) {
            Some(expected) if expected == found => Entry::Match {
                name: name.clone(),
                count: found,
            },
            Some(expected) => Entry::CountMismatch {
                name: name.clone(),
                found,
                expected,
            },
            None => Entry::Unknown {
                name: name.clone(),
                found,
            },
        })
        .collect();
    entries.extend(
        known
            .warnings_and_errors
            .iter()
            .filter(|(name, _)| !current.contains_key(name.as_str()))
            .map(|(name, &expected)| Entry::Missing {
                name: name.clone(),
                expected,
            }),
    );
    Comparison { entries }
}
