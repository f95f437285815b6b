//! Tracing subscriber installation.
//!
//! Library code only emits `tracing` events; binaries and test harnesses
//! call [`init`] once to route them to stderr. Bearer and refresh tokens are
//! never recorded as event fields.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset or invalid. Output goes
/// to stderr in compact format. Calling this more than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .ok();
}
