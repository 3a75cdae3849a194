//! JSON log output for the risk server.
//!
//! The filter directive comes from [`Config::rust_log`](crate::config::Config),
//! which has already resolved `RUST_LOG` and its default. The environment is
//! not read again here.

use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Parse a filter directive such as `"info,risk_api=debug"`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}

/// Install the global subscriber: one flattened JSON object per event on
/// stdout, with target, file and line.
///
/// Exits the process if `directive` does not parse. Panics if a global
/// subscriber is already installed.
pub fn init_logging(directive: &str) {
    let filter = match build_filter(directive) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("FATAL: Invalid log filter '{directive}': {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    tracing::info!(filter = %directive, "Logging initialized");
}
