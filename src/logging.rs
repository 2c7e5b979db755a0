//! Logging setup
//!
//! Configure via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=keycalc::calculator=debug` - engine decisions only
//!
//! Without `RUST_LOG` the `log_level` setting applies. Logs go to stderr so
//! stdout only carries the display.

use tracing_subscriber::{EnvFilter, fmt};

/// Build the filter: `RUST_LOG` first, then `default_level`, then `warn`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber.
pub fn init(default_level: &str) {
    let result = fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {}", e);
    }
}
