//! Subscriber setup for the binary.

use icaljson_core::config::Settings;
use icaljson_core::constants::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_LEVEL: &str = "debug";

/// Picks the filter directive: `RUST_LOG`, then `--verbose`, then the
/// configured level.
#[must_use]
pub fn filter_directive<'a>(rust_log: Option<&'a str>, log_level: &'a str, verbose: bool) -> &'a str {
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value,
        None if verbose => VERBOSE_LEVEL,
        None => log_level,
    }
}

/// ## Summary
/// Installs the global fmt subscriber writing to stderr.
///
/// An unparseable directive falls back to the default level and is reported
/// once the subscriber is up.
pub fn init(settings: &Settings, verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), &settings.log_level, verbose);

    let (filter, invalid) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    if let Some(error) = invalid {
        tracing::warn!(%error, directive, "Invalid log filter, using default level");
    }
}
