use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;

/// `[logging]` section. `log_level` is any level name `tracing` accepts,
/// case-insensitive.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.log_level.trim()).map_err(|_| {
            ConfigError::Message(format!("invalid log level `{}`", self.log_level))
        })
    }

    /// Rewrite `log_level` in its canonical upper-case form.
    pub(crate) fn normalise(mut self) -> Result<Self, ConfigError> {
        self.log_level = self.level()?.to_string();
        Ok(self)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO.to_string(),
        }
    }
}
