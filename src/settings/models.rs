// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Data {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,

    #[serde(default)]
    pub data: Data,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
        }
    }
}

impl Default for Data {
    fn default() -> Self {
        Data {
            dir: default_data_dir(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Loads the process configuration and hands out the immutable snapshot.
pub struct ConfigManager {
    pub(super) settings: Settings,
    pub(super) _config_path: PathBuf,
}
