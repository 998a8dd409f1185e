use crate::core::gatekeeper::{DebouncePolicy, GatekeeperConfig};
use crate::core::notifier::NotifierKind;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default database file name, as the mobile app named its store.
pub const DEFAULT_DB_NAME: &str = "ScanQR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub local_mode: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub debounce_policy: DebouncePolicy,
    /// With `same_value_cooldown` this must be >= `processing_timeout_ms`;
    /// `scan` refuses to start otherwise.
    #[serde(default = "default_cooldown_window")]
    pub cooldown_window_ms: u64,
    #[serde(default = "default_processing_timeout")]
    pub processing_timeout_ms: u64,
    #[serde(default)]
    pub notifier: NotifierKind,
    #[serde(default)]
    pub notify_on_scan: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_request_timeout() -> u64 {
    15
}
fn default_cooldown_window() -> u64 {
    2000
}
fn default_processing_timeout() -> u64 {
    800
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            api_base_url: default_api_base_url(),
            local_mode: false,
            request_timeout_secs: default_request_timeout(),
            debounce_policy: DebouncePolicy::default(),
            cooldown_window_ms: default_cooldown_window(),
            processing_timeout_ms: default_processing_timeout(),
            notifier: NotifierKind::default(),
            notify_on_scan: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("scanqr")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".scanqr")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("scanqr.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DEFAULT_DB_NAME)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn gatekeeper(&self) -> GatekeeperConfig {
        GatekeeperConfig {
            policy: self.debounce_policy,
            cooldown_window_ms: self.cooldown_window_ms,
            processing_timeout_ms: self.processing_timeout_ms,
        }
    }

    /// Create the config directory, config file (unless `is_test`) and an
    /// empty database file. Returns the database path in use.
    pub fn init_all(&mut self, custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => expand_tilde(&self.database),
        };
        self.database = db_path.to_string_lossy().to_string();

        if !is_test {
            self.save()?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
