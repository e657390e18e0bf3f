// src/report/text.rs
use super::{ReportError, Reporter};
use crate::runner::{CheckResult, RunReport};
use chrono::{DateTime, Utc};
use std::io::Write;

const RULE_WIDTH: usize = 60;

/// Human-readable console output.
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write + Send> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, title: &str) -> Result<(), ReportError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "TESTING: {}", title)?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }
}

fn status_label(passed: bool) -> &'static str {
    if passed {
        "✅ PASS"
    } else {
        "❌ FAIL"
    }
}

impl<W: Write + Send> Reporter for TextReporter<W> {
    fn suite_started(&mut self, target: &str, at: DateTime<Utc>) -> Result<(), ReportError> {
        writeln!(self.out, "Backend API Testing Suite")?;
        writeln!(self.out, "Testing URL: {}", target)?;
        writeln!(self.out, "Timestamp: {}", at.to_rfc3339())?;
        Ok(())
    }

    fn check_started(&mut self, name: &str) -> Result<(), ReportError> {
        self.header(name)
    }

    fn check_finished(&mut self, result: &CheckResult) -> Result<(), ReportError> {
        writeln!(self.out, "{} - {}", status_label(result.passed), result.name)?;
        if let Some(detail) = &result.detail {
            writeln!(self.out, "    Details: {}", detail)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn suite_finished(&mut self, report: &RunReport) -> Result<(), ReportError> {
        self.header("TEST SUMMARY")?;

        let summary = report.summary();
        writeln!(self.out, "Tests Passed: {}/{}", summary.passed, summary.total)?;
        for result in &report.results {
            writeln!(self.out, "  {} {}", status_label(result.passed), result.name)?;
        }

        let failures: Vec<_> = report.failures().collect();
        if !failures.is_empty() {
            writeln!(self.out, "\nFailed checks:")?;
            for result in failures {
                writeln!(
                    self.out,
                    "  - {}: {}",
                    result.name,
                    result.detail.as_deref().unwrap_or("no details")
                )?;
            }
        }

        if summary.all_passed() {
            writeln!(
                self.out,
                "\n🎉 ALL TESTS PASSED! Backend is functioning correctly."
            )?;
        } else {
            writeln!(
                self.out,
                "\n⚠️  {} test(s) failed. Backend needs attention.",
                summary.failed()
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool, detail: Option<&str>) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            passed,
            detail: detail.map(str::to_string),
            duration_ms: 1,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_check_line_with_details() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter
            .check_finished(&result("Error Handling", false, Some("Unexpected response to invalid request: 200")))
            .unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "❌ FAIL - Error Handling\n    Details: Unexpected response to invalid request: 200\n"
        );
    }

    #[test]
    fn test_summary_lists_every_check_and_verdict() {
        let report = RunReport {
            target: "http://localhost:8000/api".to_string(),
            started_at: Utc::now(),
            results: vec![
                result("Server Health Check", true, None),
                result("CORS Configuration", false, Some("CORS headers not found")),
            ],
        };

        let mut reporter = TextReporter::new(Vec::new());
        reporter.suite_finished(&report).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("TESTING: TEST SUMMARY"));
        assert!(text.contains("Tests Passed: 1/2"));
        assert!(text.contains("  ✅ PASS Server Health Check\n"));
        assert!(text.contains("  ❌ FAIL CORS Configuration\n"));
        assert!(text.contains("Failed checks:\n  - CORS Configuration: CORS headers not found\n"));
        assert!(text.contains("1 test(s) failed"));
    }

    #[test]
    fn test_all_passed_verdict() {
        let report = RunReport {
            target: "http://localhost:8000/api".to_string(),
            started_at: Utc::now(),
            results: vec![result("Server Health Check", true, None)],
        };

        let mut reporter = TextReporter::new(Vec::new());
        reporter.suite_finished(&report).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("ALL TESTS PASSED"));
        assert!(!text.contains("Failed checks:"));
    }
}
