// src/runner/result.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one registered check. Never mutated once recorded.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: Option<String>,
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        Self {
            total: results.len(),
            passed: results.iter().filter(|r| r.passed).count(),
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target: String,
    pub started_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_results(&self.results)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(name: &str, passed: bool) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            passed,
            detail: None,
            duration_ms: 0,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_run_counts_as_passed() {
        let summary = RunSummary::from_results(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_failures_keep_execution_order() {
        let report = RunReport {
            target: "http://localhost".to_string(),
            started_at: Utc::now(),
            results: vec![result("a", false), result("b", true), result("c", false)],
        };

        let names: Vec<_> = report.failures().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(report.summary().failed(), 2);
    }

    proptest! {
        #[test]
        fn all_passed_iff_every_result_passed(outcomes in proptest::collection::vec(any::<bool>(), 0..32)) {
            let results: Vec<_> = outcomes
                .iter()
                .enumerate()
                .map(|(i, passed)| result(&format!("check-{}", i), *passed))
                .collect();
            let summary = RunSummary::from_results(&results);

            prop_assert_eq!(summary.total, outcomes.len());
            prop_assert_eq!(summary.all_passed(), outcomes.iter().all(|p| *p));
            prop_assert_eq!(summary.passed + summary.failed(), summary.total);
        }
    }
}
