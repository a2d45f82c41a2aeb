//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;

/// `RUST_LOG` if set and valid, else `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Logs to the configured file so output does not interfere with the TUI.
///
/// `RUST_LOG` wins over the configured filter. Initialising twice is not an
/// error.
pub fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr for headless commands, filtered by
/// `replay_log_filter` unless `RUST_LOG` is set.
pub fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.replay_log_filter()))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filters_are_the_fallback() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TuiConfig::new();
        assert_eq!(env_filter(config.log_filter()).to_string(), "info");
        assert_eq!(env_filter(config.replay_log_filter()).to_string(), "warn");
    }
}
