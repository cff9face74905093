//! Persistent user preferences.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::write_atomic;

const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";
pub const MIN_CHART_SIZE: u32 = 80;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Printed after every amount.
    #[serde(default = "Config::default_currency_suffix")]
    pub currency_suffix: String,
    /// Edge length of the exported chart, in pixels.
    #[serde(default = "Config::default_chart_size")]
    pub chart_size: u32,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_suffix: Self::default_currency_suffix(),
            chart_size: Self::default_chart_size(),
            dark_mode: false,
            plain_output: false,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_suffix() -> String {
        "Ft".into()
    }

    pub fn default_chart_size() -> u32 {
        400
    }

    pub fn chart_size(&self) -> f64 {
        f64::from(self.chart_size.max(MIN_CHART_SIZE))
    }

    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => home.join(DATA_DIR),
        }
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}
