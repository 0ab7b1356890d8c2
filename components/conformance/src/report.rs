//! Aggregated results of a conformance run

use crate::error::ConformanceResult;
use crate::harness::ScenarioResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conformance run report with statistics and failure details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Total number of scenarios run
    pub total: usize,
    /// Number of scenarios whose transcript matched
    pub passed: usize,
    /// Number of scenarios whose transcript differed
    pub failed: usize,
    /// Number of scenarios that raised an unhandled error
    pub errored: usize,
    /// List of failures and errors with (scenario, reason)
    pub failures: Vec<(String, String)>,
}

impl ConformanceReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            errored: 0,
            failures: Vec::new(),
        }
    }

    /// Add a scenario result to the report
    pub fn add_result(&mut self, name: &str, result: ScenarioResult) {
        self.total += 1;
        match result {
            ScenarioResult::Pass => self.passed += 1,
            ScenarioResult::Fail(reason) => {
                self.failed += 1;
                self.failures.push((name.to_string(), reason));
            }
            ScenarioResult::Error(reason) => {
                self.errored += 1;
                self.failures.push((name.to_string(), reason));
            }
        }
    }

    /// Calculate the pass rate as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Conformance Results:\n\
             Total: {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}\n\
             Errored: {}",
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed,
            self.errored
        )
    }

    /// Generate a detailed report including failures
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures:\n");
            for (name, reason) in &self.failures {
                output.push_str(&format!("  - {}\n    Reason: {}\n", name, reason));
            }
        }

        output
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: &ConformanceReport) {
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
        self.errored += other.errored;
        self.failures.extend(other.failures.iter().cloned());
    }

    /// Check if every scenario passed
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Export report as JSON
    pub fn to_json(&self) -> ConformanceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import report from JSON
    pub fn from_json(json: &str) -> ConformanceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the JSON form of the report to `path`
    pub fn write_json(&self, path: impl AsRef<Path>) -> ConformanceResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}
