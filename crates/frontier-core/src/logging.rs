use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log a frontier's usage counters at debug level.
///
/// Usage:
/// ```rust,ignore
/// log_frontier_stats!(frontier.stats(), "dijkstra");
/// ```
#[macro_export]
macro_rules! log_frontier_stats {
    ($stats:expr, $engine:expr) => {{
        let stats = $stats;
        tracing::debug!(
            engine = $engine,
            inserted = stats.inserted,
            popped = stats.popped,
            stale_discarded = stats.stale_discarded,
            "frontier_stats"
        );
    }};
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "run_engine");
/// // Or with additional fields:
/// trace_time!(start, "run_engine", steps = steps.len());
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

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "frontier=debug",
        (false, None) => "frontier=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Filter directive for a bare level or a full directive string.
///
/// `frontier` is a target prefix, so it also covers `frontier_core`.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("frontier={}", level)
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // FRONTIER_LOG wins over the CLI flags
    let filter = EnvFilter::try_from_env("FRONTIER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
