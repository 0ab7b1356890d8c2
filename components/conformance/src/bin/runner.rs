//! Conformance Runner
//!
//! Replays the reference scripts against the runtime and exits non-zero if
//! any transcript differs.

use clap::Parser;
use conformance::{init_tracing, ConformanceHarness, RunnerArgs};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = RunnerArgs::parse();
    init_tracing(args.verbose);

    let scenarios = args.suite.scenarios();
    let mut harness = ConformanceHarness::new().with_echo(!args.quiet);
    let report = harness.run_all(&scenarios);

    println!("{}", report.detailed_summary());

    if let Some(path) = &args.json {
        report.write_json(path)?;
        info!(path = %path.display(), "report written");
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
