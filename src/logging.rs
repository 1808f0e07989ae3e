//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to stderr so
//! reports printed on stdout stay machine-readable.

use anyhow::{Result, anyhow};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the level filter, `verbose` forcing `debug` for this crate
fn build_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::new(format!("warn,heatrisk={level},tower_http={level}"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_filter(config, verbose));

    let installed = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to initialise logging: {e}"))?;

    tracing::debug!(level = %config.level, format = %config.format, "logging initialised");
    Ok(())
}
