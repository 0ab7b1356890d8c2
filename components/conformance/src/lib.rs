//! Conformance harness for the value model and list type
//!
//! This crate replays the reference scripts (`repr` and `lists`) against the
//! runtime, compares the printed transcript with the expected one, and
//! aggregates the outcome into a report.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod harness;
pub mod report;
pub mod scenario;

pub use cli::{init_tracing, RunnerArgs, Suite};
pub use error::{ConformanceError, ConformanceResult};
pub use harness::{compare_transcript, ConformanceHarness, ScenarioResult};
pub use report::ConformanceReport;
pub use scenario::Scenario;
