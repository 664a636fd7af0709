use crate::{
    CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, ExternalApiConfig,
    LoggingConfig, ServerConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub external_api: ExternalApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LB_CONFIG_DIR env var, else use ./.linkbridge/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply deployment environment variables (PORT, DATABASE_PATH, UNIPILE_*)
    /// 4. Apply LB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LB_CONFIG_DIR env var > ./.linkbridge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("LB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.external_api.validate()?;

        Ok(())
    }

    /// Path of the store document. Relative paths resolve against the cwd.
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.path)
    }

    /// Path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (static: {})",
            self.server.host, self.server.port, self.server.static_dir
        );
        info!("  storage: {}", self.storage.path);
        info!(
            "  external_api: {} (timeout {}s, key {})",
            self.external_api.base_url,
            self.external_api.timeout_secs,
            if self.external_api.has_api_key() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        if !self.external_api.has_api_key() {
            warn!("UNIPILE_API_KEY is not set; every connect attempt will fail");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Deployment names
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("DATABASE_PATH", &mut self.storage.path);
        Self::apply_env_string("UNIPILE_API_URL", &mut self.external_api.base_url);
        Self::apply_env_option_string("UNIPILE_API_KEY", &mut self.external_api.api_key);

        // Server
        Self::apply_env_string("LB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("LB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("LB_STATIC_DIR", &mut self.server.static_dir);

        // Storage
        Self::apply_env_string("LB_STORAGE_PATH", &mut self.storage.path);

        // External API
        Self::apply_env_string("LB_EXTERNAL_API_URL", &mut self.external_api.base_url);
        Self::apply_env_option_string("LB_EXTERNAL_API_KEY", &mut self.external_api.api_key);
        Self::apply_env_parse(
            "LB_EXTERNAL_API_TIMEOUT_SECS",
            &mut self.external_api.timeout_secs,
        );

        // Logging
        Self::apply_env_parse("LB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values (blank values ignored)
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
