use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_IBAN_LENGTH: usize = 32;

pub const KEYS: &[&str] = &["max-iban-length", "confirm-delete"];

/// Configuration for ibanz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct IbanzConfig {
    /// Cap on the formatted IBAN input, spaces included
    #[serde(default = "default_max_iban_length")]
    pub max_iban_length: usize,

    /// Ask before deleting records or clearing the store
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_max_iban_length() -> usize {
    DEFAULT_MAX_IBAN_LENGTH
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for IbanzConfig {
    fn default() -> Self {
        Self {
            max_iban_length: DEFAULT_MAX_IBAN_LENGTH,
            confirm_delete: true,
        }
    }
}

impl IbanzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-iban-length" => Some(self.max_iban_length.to_string()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "max-iban-length" => {
                let len: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid length: {}", value))?;
                if len == 0 {
                    return Err("max-iban-length must be positive".to_string());
                }
                self.max_iban_length = len;
            }
            "confirm-delete" => {
                self.confirm_delete = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => return Err(format!("Invalid boolean: {}", value)),
                };
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
