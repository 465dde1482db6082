use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

// level named by the configuration, falling back to WARN when it cannot be parsed
pub fn max_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.as_str()).unwrap_or(Level::WARN)
}

pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(max_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // stdout carries the menu protocol, so logs go to stderr.
        .with_writer(std::io::stderr)
        .json()
        .init();
}
