//! Logging - tracing subscriber setup
//!
//! The foundation layer only emits `tracing` records. Binaries and demos
//! that want them printed call [`init_logging`] once at startup.

use crate::config::LoggingConfig;
use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG` or `config.level`
///
/// Fails with `Error::Config` on an unknown level or when a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(matches!(init_logging(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = LoggingConfig::debug();
        // the first call may already fail if another test installed one
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(Error::Config(_))));
    }
}
