//! Structured logging setup.
//!
//! Flock operations emit `tracing` events (`debug` for fill and migrate,
//! `trace` per member flight). Hosts call [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this again after a
/// subscriber is installed does nothing.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
