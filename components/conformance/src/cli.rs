//! Command-line configuration for the conformance runner

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

/// Which scenarios to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Suite {
    /// Every reference scenario
    All,
    /// Textual representation of values
    Repr,
    /// List semantics and for/else
    Lists,
}

impl Suite {
    /// Scenarios selected by this suite
    pub fn scenarios(self) -> Vec<Scenario> {
        match self {
            Suite::All => Scenario::all(),
            Suite::Repr => vec![Scenario::repr()],
            Suite::Lists => vec![Scenario::lists()],
        }
    }
}

/// Runs the reference scripts and checks their printed output
#[derive(Debug, Parser)]
#[command(name = "conformance-runner", version, about)]
pub struct RunnerArgs {
    /// Scenarios to run
    #[arg(long, value_enum, default_value_t = Suite::All)]
    pub suite: Suite,

    /// Write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Do not echo scenario output
    #[arg(long, short)]
    pub quiet: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    pub verbose: bool,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
/// when `verbose` is set. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
