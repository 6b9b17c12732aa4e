//! Tracing subscriber setup for embedding processes.

// 3rd party crates
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Installs the global fmt subscriber.
///
/// `level` accepts anything `EnvFilter` understands (`"info"`,
/// `"subgate=debug,warn"`, ...). HTTP client internals are pinned to `error`
/// so provider calls do not drown the workflow logs.
pub fn init(level: &str) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}
