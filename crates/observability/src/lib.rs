//! Tracing/logging initialization shared by binaries and test harnesses.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: quiet overall, but keep the
/// session facade's dispatch trail visible.
const DEFAULT_DIRECTIVES: &str = "info,furnish_session=debug";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). `RUST_LOG`
/// overrides [`DEFAULT_DIRECTIVES`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
