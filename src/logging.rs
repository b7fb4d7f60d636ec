//! Log setup
//!
//! The `--log-level` flag takes the numeric severities familiar from other
//! build tooling (10 debug, 20 info, 30 warning, 40 error, 50 critical).
//! `RUST_LOG`, when set, takes precedence over the flag.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default numeric log level (info)
pub const DEFAULT_LOG_LEVEL: u8 = 20;

/// Map a numeric severity to a tracing filter
///
/// Anything at or below a threshold enables that level; 0 enables trace.
pub fn level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::TRACE,
        1..=10 => LevelFilter::DEBUG,
        11..=20 => LevelFilter::INFO,
        21..=30 => LevelFilter::WARN,
        31..=50 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}

/// Install the global subscriber, writing to stderr
///
/// Called once from `main`.
pub fn init(level: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
