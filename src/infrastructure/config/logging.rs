//! Logging configuration and initialization.

use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so command output on stdout stays machine-readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if let Err(err) = result {
            debug!(error = %err, "Keeping the existing tracing subscriber");
        }
    }

    /// Same settings with the level raised for `-v` flags.
    #[must_use]
    pub fn with_verbosity(&self, verbose: u8) -> Self {
        let level = match verbose {
            0 => self.level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        Self {
            level,
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.with_verbosity(0).level, "warn");
        assert_eq!(config.with_verbosity(1).level, "debug");
        assert_eq!(config.with_verbosity(3).level, "trace");
        assert_eq!(config.with_verbosity(2).format, "pretty");
    }

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        let config = LoggingConfig {
            level: "debug".into(),
            format: "json".into(),
        };
        config.init();
        config.init();
    }
}
