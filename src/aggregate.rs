//! Finding aggregation across lint responses.
//!
//! A [`Tally`] is threaded through the scan and folded into an
//! [`AggregateCount`] once the walk completes.

use crate::error::{HarnessError, Result};
use crate::models::finding::Finding;
use crate::models::AggregateCount;
use std::path::Path;

/// Parse one lint response into its findings.
///
/// The raw text is carried in the error so the operator can see what the
/// endpoint actually returned.
pub fn parse_findings(path: &Path, text: &str) -> Result<Vec<Finding>> {
    serde_json::from_str::<Vec<Finding>>(text).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "response is not a findings array");
        HarnessError::ResponseParse {
            path: path.to_path_buf(),
            raw: text.to_string(),
        }
    })
}

/// Running counters for one harness run.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    linter: String,
    files: usize,
    invocations: usize,
    warnings: Vec<String>,
}

impl Tally {
    /// `linter` names the linter whose findings count as invocations.
    pub fn new(linter: &str) -> Self {
        Self {
            linter: linter.to_string(),
            ..Self::default()
        }
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// Fold one response's findings into the tally.
    ///
    /// Stops at the first fatal finding; findings after it are not counted.
    pub fn absorb(&mut self, path: &Path, raw: &str, findings: &[Finding]) -> Result<()> {
        for f in findings {
            if f.is_fatal() {
                return Err(HarnessError::FatalFinding {
                    path: path.to_path_buf(),
                    finding: f.finding.clone(),
                    raw: raw.to_string(),
                });
            }
            if f.linter == self.linter {
                self.invocations += 1;
            }
            if f.is_warning() {
                self.warnings.push(f.finding.clone());
            }
        }
        Ok(())
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// Check the file/invocation invariant and tally warnings by name.
    pub fn finish(self) -> Result<AggregateCount> {
        if self.files != self.invocations {
            return Err(HarnessError::CountMismatch {
                files: self.files,
                invocations: self.invocations,
                linter: self.linter,
            });
        }
        Ok(count_names(self.warnings))
    }
}

/// Count occurrences of each name.
pub fn count_names<I>(names: I) -> AggregateCount
where
    I: IntoIterator<Item = String>,
{
    let mut counts = AggregateCount::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: &str, name: &str, linter: &str) -> Finding {
        Finding {
            severity: severity.into(),
            finding: name.into(),
            linter: linter.into(),
        }
    }

    #[test]
    fn test_parse_findings_reads_capitalized_fields() {
        let text = r#"[
            {"Severity":"warning","Finding":"w_a","Linter":"zlint"},
            {"Severity":"info","Finding":"Certificate linted","Linter":"pkimetal"}
        ]"#;
        let found = parse_findings(Path::new("a.pem"), text).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], finding("warning", "w_a", "zlint"));
        assert_eq!(found[1].linter, "pkimetal");
    }

    #[test]
    fn test_parse_findings_surfaces_raw_text() {
        let err = parse_findings(Path::new("a.pem"), "<html>bad gateway</html>").unwrap_err();
        match err {
            HarnessError::ResponseParse { raw, .. } => assert_eq!(raw, "<html>bad gateway</html>"),
            other => panic!("unexpected error: {other}"),
        }
        // An object instead of an array is also rejected
        assert!(parse_findings(Path::new("a.pem"), r#"{"Severity":"warning"}"#).is_err());
    }

    #[test]
    fn test_absorb_counts_invocations_and_warnings() {
        let mut tally = Tally::new("pkimetal");
        tally.record_file();
        tally
            .absorb(
                Path::new("a.pem"),
                "",
                &[
                    finding("warning", "w_a", "zlint"),
                    finding("warning", "w_a", "certlint"),
                    finding("error", "e_b", "zlint"),
                    finding("info", "done", "pkimetal"),
                ],
            )
            .unwrap();
        assert_eq!(tally.files(), 1);
        assert_eq!(tally.invocations(), 1);
        let counts = tally.finish().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("w_a"), Some(&2));
    }

    #[test]
    fn test_absorb_stops_on_fatal() {
        let mut tally = Tally::new("pkimetal");
        tally.record_file();
        let err = tally
            .absorb(
                Path::new("a.pem"),
                "raw",
                &[
                    finding("warning", "w_a", "zlint"),
                    finding("fatal", "cannot parse", "pkimetal"),
                    finding("info", "done", "pkimetal"),
                ],
            )
            .unwrap_err();
        match err {
            HarnessError::FatalFinding { finding, raw, .. } => {
                assert_eq!(finding, "cannot parse");
                assert_eq!(raw, "raw");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_finish_rejects_file_invocation_mismatch() {
        let mut tally = Tally::new("pkimetal");
        tally.record_file();
        tally.record_file();
        tally
            .absorb(Path::new("a.pem"), "", &[finding("info", "done", "pkimetal")])
            .unwrap();
        let err = tally.finish().unwrap_err();
        assert!(matches!(
            err,
            HarnessError::CountMismatch {
                files: 2,
                invocations: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_count_names_is_order_independent() {
        let names = ["b", "a", "b", "c", "a", "b"];
        let forward = count_names(names.iter().map(|s| s.to_string()));
        let backward = count_names(names.iter().rev().map(|s| s.to_string()));
        let mut sorted = names.to_vec();
        sorted.sort();
        let ordered = count_names(sorted.into_iter().map(String::from));
        assert_eq!(forward, backward);
        assert_eq!(forward, ordered);
        assert_eq!(forward.get("b"), Some(&3));
        assert_eq!(forward.get("a"), Some(&2));
        assert_eq!(forward.get("c"), Some(&1));
    }

    #[test]
    fn test_empty_run_passes_invariant() {
        let counts = Tally::new("pkimetal").finish().unwrap();
        assert!(counts.is_empty());
    }
}
