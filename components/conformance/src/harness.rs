//! Scenario execution and transcript comparison

use crate::report::ConformanceReport;
use crate::scenario::Scenario;
use builtins::{Console, NullWriter};
use tracing::{info, warn};

/// Result of running a single scenario
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioResult {
    /// Transcript matched exactly
    Pass,
    /// Transcript differed; holds the first difference
    Fail(String),
    /// Script raised an error it did not handle
    Error(String),
}

impl ScenarioResult {
    /// Check if the result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, ScenarioResult::Pass)
    }

    /// Check if the result is a transcript mismatch
    pub fn is_fail(&self) -> bool {
        matches!(self, ScenarioResult::Fail(_))
    }

    /// Check if the result is an unhandled error
    pub fn is_error(&self) -> bool {
        matches!(self, ScenarioResult::Error(_))
    }
}

/// Describe the first difference between two transcripts, if any
pub fn compare_transcript(expected: &[&str], actual: &[String]) -> Option<String> {
    for (line, (want, got)) in expected.iter().zip(actual).enumerate() {
        if want != got {
            return Some(format!(
                "line {}: expected {:?}, got {:?}",
                line + 1,
                want,
                got
            ));
        }
    }
    match expected.len().cmp(&actual.len()) {
        std::cmp::Ordering::Greater => Some(format!(
            "missing output from line {}: expected {:?}",
            actual.len() + 1,
            expected[actual.len()]
        )),
        std::cmp::Ordering::Less => Some(format!(
            "unexpected extra output at line {}: {:?}",
            expected.len() + 1,
            actual[expected.len()]
        )),
        std::cmp::Ordering::Equal => None,
    }
}

/// Runs scenarios and collects their results
pub struct ConformanceHarness {
    /// Whether printed lines are echoed to stdout
    echo: bool,
    /// Results of executed scenarios, in run order
    results: Vec<(String, ScenarioResult)>,
}

impl ConformanceHarness {
    /// Create a harness that does not echo output
    pub fn new() -> Self {
        Self {
            echo: false,
            results: Vec::new(),
        }
    }

    /// Echo each scenario's transcript to stdout while it runs
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn console(&self) -> Console {
        if self.echo {
            Console::new()
        } else {
            Console::with_writer(Box::new(NullWriter))
        }
    }

    /// Run one scenario and record its result
    pub fn run_scenario(&mut self, scenario: &Scenario) -> ScenarioResult {
        info!(scenario = scenario.name, "running scenario");
        let console = self.console();
        let result = match scenario.run(&console) {
            Err(err) => ScenarioResult::Error(err.to_string()),
            Ok(transcript) => match compare_transcript(scenario.expected, &transcript) {
                Some(reason) => ScenarioResult::Fail(reason),
                None => ScenarioResult::Pass,
            },
        };
        match &result {
            ScenarioResult::Pass => info!(scenario = scenario.name, "passed"),
            ScenarioResult::Fail(reason) | ScenarioResult::Error(reason) => {
                warn!(scenario = scenario.name, %reason, "failed")
            }
        }
        self.results.push((scenario.name.to_string(), result.clone()));
        result
    }

    /// Run every scenario and build a report
    pub fn run_all(&mut self, scenarios: &[Scenario]) -> ConformanceReport {
        let mut report = ConformanceReport::new();
        for scenario in scenarios {
            let result = self.run_scenario(scenario);
            report.add_result(scenario.name, result);
        }
        report
    }

    /// Results recorded so far
    pub fn results(&self) -> &[(String, ScenarioResult)] {
        &self.results
    }
}

impl Default for ConformanceHarness {
    fn default() -> Self {
        Self::new()
    }
}
