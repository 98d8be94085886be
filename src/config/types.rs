use serde::Deserialize;

use crate::messages::Language;

/// Largest accepted number of decimal places for temperatures.
pub const MAX_PRECISION: usize = 6;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    /// Output language (default: "ru").
    #[serde(default)]
    pub language: Language,
    /// Decimal places for temperatures (default: 2).
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Diagnostic logging written to stderr.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_precision() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            precision: default_precision(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
