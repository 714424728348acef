//! Tracing setup for binaries embedding the core.
//!
//! The library only emits events; installing a subscriber is left to the
//! host process.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a stderr subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Safe to call more than once;
/// later calls are ignored.
///
/// # Example
/// ```bash
/// RUST_LOG=gradecore=debug gradecore grade --exam1 7 --exam2 8
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
