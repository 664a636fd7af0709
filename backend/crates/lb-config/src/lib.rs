mod config;
mod error;
mod external_api_config;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use external_api_config::ExternalApiConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".linkbridge";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STATIC_DIR: &str = "./client/build";

const DEFAULT_STORAGE_PATH: &str = "./database.json";

const DEFAULT_EXTERNAL_API_URL: &str = "https://api.unipile.com/v1";
const DEFAULT_EXTERNAL_API_TIMEOUT_SECS: u64 = 30;
const MIN_EXTERNAL_API_TIMEOUT_SECS: u64 = 1;
const MAX_EXTERNAL_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
