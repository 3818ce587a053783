use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Field names a complete configuration file carries.
pub const CONFIG_FIELDS: [&str; 3] = ["data_file", "default_break", "report_dir"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub default_break: u32,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("garde_data.csv")
        .to_string_lossy()
        .to_string()
}

fn default_report_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_break: 0,
            report_dir: default_report_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("nannylog")
        } else if let Some(home) = dirs::home_dir() {
            home.join(".nannylog")
        } else {
            PathBuf::from(".nannylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("nannylog.conf")
    }

    /// Resolved path of the CSV data file (`~` expanded).
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn report_path(&self) -> PathBuf {
        expand_tilde(&self.report_dir)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Fields absent from a configuration file's text (they take defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        let map = match &value {
            serde_yaml::Value::Mapping(m) => Some(m),
            serde_yaml::Value::Null => None,
            _ => {
                return Err(AppError::Config(
                    "configuration file is not a YAML mapping".into(),
                ));
            }
        };

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|f| map.is_none_or(|m| !m.contains_key(*f)))
            .collect())
    }
}
