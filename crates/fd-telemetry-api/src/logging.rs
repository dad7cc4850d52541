//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// `RUST_LOG` filter, falling back to [`DEFAULT_LOG_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    filter_or_default(EnvFilter::try_from_default_env())
}

fn filter_or_default<E>(parsed: Result<EnvFilter, E>) -> EnvFilter {
    parsed.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global JSON subscriber.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .init();
}
