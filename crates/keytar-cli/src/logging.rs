//! Tracing subscriber setup.

use keytar_core::config::LogLevel;
use keytar_core::env::{self, vars};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the keytar crates.
///
/// `-v` and `-vv` beat the configured level.
pub fn directive(verbose: u8, level: LogLevel) -> String {
    let level = match verbose {
        0 => level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    format!("keytar={level},keytar_core={level},keytar_cli={level}")
}

/// Install the global subscriber. `KEYTAR_LOG`, then `RUST_LOG`, override
/// everything else. Output goes to stderr so `keytar get` stays pipeable.
pub fn init(verbose: u8, level: LogLevel) {
    let filter = env::get_var(vars::KEYTAR_LOG)
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
