mod log_level;
mod server;

use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load()` that must not leak in from the host
const OVERRIDE_VARS: [&str; 14] = [
    "PORT",
    "DATABASE_PATH",
    "UNIPILE_API_URL",
    "UNIPILE_API_KEY",
    "LB_SERVER_HOST",
    "LB_SERVER_PORT",
    "LB_STATIC_DIR",
    "LB_STORAGE_PATH",
    "LB_EXTERNAL_API_URL",
    "LB_EXTERNAL_API_KEY",
    "LB_EXTERNAL_API_TIMEOUT_SECS",
    "LB_LOG_LEVEL",
    "LB_LOG_COLORED",
    "LB_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config dir with LB_CONFIG_DIR pointing at it and all override variables cleared
pub(crate) struct ConfigDirFixture {
    pub(crate) dir: TempDir,
    _config_dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> ConfigDirFixture {
    let dir = TempDir::new().unwrap();
    let config_dir = EnvGuard::set("LB_CONFIG_DIR", dir.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.iter().map(|key| EnvGuard::remove(*key)).collect();

    ConfigDirFixture {
        dir,
        _config_dir: config_dir,
        _cleared: cleared,
    }
}
