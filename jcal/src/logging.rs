//! Tracing subscriber for the `jcal` binary.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown.
const TARGETS: &[&str] = &["jcal", "jl_core", "jl_time"];

/// Install a stderr `fmt` subscriber.
///
/// `-v` raises the level one step at a time from `warn` up to `trace`; a set
/// `RUST_LOG` replaces the flag entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn directives(verbosity: u8) -> String {
    let level = ["warn", "info", "debug", "trace"][usize::from(verbosity.min(3))];
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
