//! # Configuration
//!
//! Rollbook reads an optional `config.json` from its data directory. A missing
//! file means defaults; a malformed one is an error rather than a silent reset.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `student-data.json` | File name of the document inside the data dir |
//! | `default_class` | unset | Class info used by `rollbook import` when `--class` is omitted |

use crate::error::{Result, RollbookError};
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rollbook, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbookConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_class: Option<String>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_class: None,
        }
    }
}

impl RollbookConfig {
    pub const KEYS: [&'static str; 2] = ["data_file", "default_class"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| RollbookError::persistence("read", &config_path, e))?;
        let config: RollbookConfig = serde_json::from_str(&content).map_err(|e| {
            RollbookError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .map_err(|e| RollbookError::persistence("create directory", config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .map_err(|e| RollbookError::persistence("write", &config_path, e))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "data_file" => Ok(Some(self.data_file.clone())),
            "default_class" => Ok(self.default_class.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "data_file" => next.data_file = value.to_string(),
            "default_class" => {
                next.default_class = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            _ => return Err(unknown_key(key)),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let name = self.data_file.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(RollbookError::Config(format!(
                "data_file must be a plain file name, got {:?}",
                name
            )));
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> RollbookError {
    RollbookError::Config(format!(
        "unknown key {:?} (expected one of: {})",
        key,
        RollbookConfig::KEYS.join(", ")
    ))
}
