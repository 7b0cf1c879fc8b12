use crate::error::{Result, StickerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIRNAME: &str = ".stickers";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";

/// Keys accepted by `get`/`set`, in display order.
pub const KEYS: [&str; 3] = ["output-dir", "static-dir", "address"];

/// Configuration for stickers, stored in .stickers/config.json
///
/// Sheet geometry is intentionally absent: every sheet uses the same stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickerConfig {
    /// Directory the console front end writes sheets to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory the web front end writes sheets to
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Address the web front end listens on
    #[serde(default = "default_address")]
    pub address: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_DIR)
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            static_dir: default_static_dir(),
            address: default_address(),
        }
    }
}

impl StickerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StickerError::Io)?;
        let config: StickerConfig =
            serde_json::from_str(&content).map_err(StickerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StickerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StickerError::Serialization)?;
        fs::write(config_path, content).map_err(StickerError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output-dir" => Some(self.output_dir.display().to_string()),
            "static-dir" => Some(self.static_dir.display().to_string()),
            "address" => Some(self.address.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(StickerError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "output-dir" => self.output_dir = PathBuf::from(value),
            "static-dir" => self.static_dir = PathBuf::from(value),
            "address" => {
                if !value.contains(':') {
                    return Err(StickerError::Config(format!(
                        "address must look like host:port, got {}",
                        value
                    )));
                }
                self.address = value.to_string();
            }
            other => {
                return Err(StickerError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StickerConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.address, "127.0.0.1:5000");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StickerConfig::load(temp_dir.path().join(CONFIG_DIRNAME)).unwrap();
        assert_eq!(config, StickerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join(CONFIG_DIRNAME);

        let mut config = StickerConfig::default();
        config.set("output-dir", "labels").unwrap();
        config.save(&dir).unwrap();

        let loaded = StickerConfig::load(&dir).unwrap();
        assert_eq!(loaded.output_dir, PathBuf::from("labels"));
        assert_eq!(loaded.address, "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"address": "0.0.0.0:8080"}"#,
        )
        .unwrap();

        let config = StickerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.address, "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            StickerConfig::load(temp_dir.path()),
            Err(StickerError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = StickerConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some());
        }
        assert_eq!(config.get("geometry"), None);

        config.set("address", "0.0.0.0:80").unwrap();
        assert_eq!(config.get("address").unwrap(), "0.0.0.0:80");
        assert!(config.set("address", "localhost").is_err());
        assert!(config.set("static-dir", "  ").is_err());
        assert!(config.set("sticker-width", "5").is_err());
    }
}
