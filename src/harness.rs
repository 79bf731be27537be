//! Harness runner: load known results, scan, aggregate, compare.
//!
//! Stages run strictly in sequence and the first error ends the run.

use crate::aggregate::{parse_findings, Tally};
use crate::baseline::load_baseline;
use crate::client::LintClient;
use crate::compare::compare;
use crate::config::Effective;
use crate::error::Result;
use crate::models::{RunReport, Summary};
use crate::scan::scan;

/// Execute one full run against `client`.
///
/// Returns the comparison report; drift is reported through
/// [`RunReport::passed`], not as an error.
pub fn run<C: LintClient + ?Sized>(eff: &Effective, client: &C) -> Result<RunReport> {
    let known = load_baseline(&eff.baseline)?;
    tracing::info!(dir = %eff.dir.display(), suffix = %eff.suffix, "scanning");

    let mut tally = Tally::new(&eff.linter);
    for scanned in scan(&eff.dir, &eff.suffix, client) {
        let scanned = scanned?;
        tally.record_file();
        let findings = parse_findings(&scanned.path, &scanned.response)?;
        tally.absorb(&scanned.path, &scanned.response, &findings)?;
    }
    let files = tally.files();
    let invocations = tally.invocations();
    tracing::info!(files, invocations, "scan complete");

    let current = tally.finish()?;
    let comparison = compare(&current, &known);
    let summary = Summary {
        files,
        invocations,
        warnings: current.values().sum(),
        mismatches: comparison.mismatch_count(),
        drift: comparison.has_mismatch(),
    };
    Ok(RunReport {
        entries: comparison.entries,
        summary,
    })
}
