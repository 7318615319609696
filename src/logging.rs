//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, filtered by the `LOOK_LOG`
//! environment variable (`EnvFilter` syntax, default `info`). Report output from
//! the scheduler is separate and goes wherever its `Reporter` sends it.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// ENV used to set the log filter
pub const FILTER_ENV: &str = "LOOK_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(setup_logging);
}

fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(FILTER_ENV)
        .from_env_lossy();
    let layer = fmt::layer()
        .event_format(fmt::format().compact())
        .with_writer(std::io::stderr)
        .with_filter(filter);
    if tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .is_err()
    {
        eprintln!("tracing subscriber already installed");
    }
}
