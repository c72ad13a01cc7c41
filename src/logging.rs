//! Logging setup
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to print them on
//! stderr as plain `LEVEL message key=value` lines, keeping stdout for the translated
//! document.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Parse a level name from configuration (`error`, `warn`, `info`, `debug`, `trace`, `off`)
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Raise `base` by `verbosity` steps (one per `-v` on the command line)
pub fn bump_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    const LADDER: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = LADDER.iter().position(|l| *l == base).unwrap_or(2);
    LADDER[(start + verbosity as usize).min(LADDER.len() - 1)]
}

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(level);

    let _ = Registry::default().with(layer).try_init();
}
