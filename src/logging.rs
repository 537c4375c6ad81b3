use crate::config::EnvironmentView;
use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

#[must_use]
pub fn log_filter(env: &EnvironmentView) -> String {
    env.get(ENV_LOG).unwrap_or(DEFAULT_LOG_FILTER).to_string()
}

/// Installs the global subscriber. Logs go to stderr since stdout carries the
/// MCP stream. Safe to call more than once.
pub fn init_tracing(env: &EnvironmentView) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_filter(env))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
