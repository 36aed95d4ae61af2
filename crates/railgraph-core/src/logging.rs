//! Diagnostics on stderr
//!
//! Stdout belongs to query results, so every event goes to stderr. The
//! filter covers both railgraph crates; `RUST_LOG` or `RAILGRAPH_LOG`
//! replace it wholesale.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose events pass the default filter
const TARGETS: [&str; 2] = ["railgraph", "railgraph_core"];

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "RAILGRAPH_LOG";

/// Log elapsed time since `$start` at trace level, with optional fields.
///
/// ```rust,ignore
/// let start = Instant::now();
/// trace_time!(start, "load_edges", edges = graph.edge_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Level chosen from the global flags. An explicit `--log-level` beats
/// `--verbose`.
fn requested_level(verbose: bool, log_level: Option<&str>) -> &str {
    match log_level {
        Some(level) => level,
        None if verbose => "debug",
        None => "warn",
    }
}

/// Filter directive for every railgraph target. A value that already names
/// a target (`railgraph_core::network=trace`) is used as given.
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber for a CLI run
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = directive_for(requested_level(verbose, log_level));
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(&directive))?;

    let stderr = fmt::layer().with_writer(std::io::stderr).with_ansi(false);
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        // span close events carry the busy/idle time of instrumented queries
        registry
            .with(
                stderr
                    .json()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(stderr.compact().with_target(false))
            .try_init()?;
    }

    Ok(())
}
