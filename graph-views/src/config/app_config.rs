use crate::config::log_config::LoggingConfig;
use config::{Config, ConfigError, File, FileFormat};
use graph_views_api::core::utils::logging::init_global_logger;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, PartialEq, Clone, Serialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Install the global tracing subscriber at the configured level.
    pub fn init_logging(&self) {
        init_global_logger(self.logging.log_level.clone());
    }
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
        }
    }
}

// Order of precedence of config loading: config file >> config args >> config default
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let app_config = app_config.unwrap_or_default();
    let json =
        serde_json::to_string(&app_config).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    let mut app_config = builder.build()?.try_deserialize::<AppConfig>()?;
    app_config.logging = app_config.logging.normalise()?;
    Ok(app_config)
}
