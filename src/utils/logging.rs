//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "luscher=info";

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init()?;

    Ok(())
}
