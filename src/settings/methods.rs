// Standard library
use std::path::{Path, PathBuf};
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{error, info};

// Current module imports
use super::constants::{
    CAPTCHA_FILE, CONFIG_PATH_ENV, DEFAULT_CONFIG, DOMAINS_FILE, ENV_PREFIX,
    PROVIDER_SETTINGS_FILE, USAGES_FILE,
};
use super::errors::SettingsError;
use super::models::{ConfigManager, Settings};

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    /// Record store document path.
    pub fn domains_path(&self) -> PathBuf {
        self.data.dir.join(DOMAINS_FILE)
    }

    /// Usage registry document path.
    pub fn usages_path(&self) -> PathBuf {
        self.data.dir.join(USAGES_FILE)
    }

    /// Per-base-domain provider settings document path.
    pub fn providers_path(&self) -> PathBuf {
        self.data.dir.join(PROVIDER_SETTINGS_FILE)
    }

    /// Captcha secret document path.
    pub fn captcha_path(&self) -> PathBuf {
        self.data.dir.join(CAPTCHA_FILE)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(SettingsError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.data.dir.as_os_str().is_empty() {
            return Err(SettingsError::MissingDataDir);
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the
    /// configuration.
    pub fn new() -> Result<Self, SettingsError> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;
        settings.validate().map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        info!("Settings loaded from {:?}", config_path);

        Ok(ConfigManager {
            settings,
            _config_path: config_path,
        })
    }

    /// The loaded settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("subgate").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
