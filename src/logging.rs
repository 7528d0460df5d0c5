//! logging
//!
//! Diagnostic logging via `tracing`.
//!
//! The filter comes from `RUST_LOG` when set; otherwise `--debug` selects
//! `debug` and the default is `warn`. Logs go to stderr so they never mix
//! with tool output or JSON reports on stdout.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Default filter directive for the given debug flag.
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Errors if called twice.
pub fn init(debug: bool) -> Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(debug)))
        .context("failed to configure tracing level")?;

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(console)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
