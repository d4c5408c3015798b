//! Global kindred configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_URL, DEFAULT_LOOKAHEAD_DAYS};
use crate::error::{KindredError, KindredResult};

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_lookahead_days() -> u32 {
    DEFAULT_LOOKAHEAD_DAYS
}

/// Configuration at ~/.config/kindred/config.toml, overridable with
/// `KINDRED_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KindredConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
}

impl Default for KindredConfig {
    fn default() -> Self {
        KindredConfig {
            api_url: default_api_url(),
            lookahead_days: default_lookahead_days(),
        }
    }
}

impl KindredConfig {
    pub fn config_dir() -> KindredResult<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| KindredError::Config("Could not determine config directory".into()))?
            .join("kindred"))
    }

    pub fn config_path() -> KindredResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first if
    /// no config file exists yet.
    pub fn load() -> KindredResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> KindredResult<Self> {
        let config: KindredConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("KINDRED"))
            .build()
            .map_err(|e| KindredError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| KindredError::Config(e.to_string()))?;

        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> KindredResult<()> {
        let contents = format!(
            "\
# kindred configuration

# Base URL of the family roster API:
# api_url = \"{}\"

# How many days ahead to look for birthdays and memorials:
# lookahead_days = {}
",
            DEFAULT_API_URL, DEFAULT_LOOKAHEAD_DAYS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KindredError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KindredError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = KindredConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.lookahead_days, 7);
        assert!(!config.api_url.is_empty());
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        KindredConfig::create_default_config(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# api_url"));

        let config = KindredConfig::load_from(&path).unwrap();
        assert_eq!(config.lookahead_days, DEFAULT_LOOKAHEAD_DAYS);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://family.example.com/api\"\nlookahead_days = 14\n",
        )
        .unwrap();

        let config = KindredConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://family.example.com/api");
        assert_eq!(config.lookahead_days, 14);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "lookahead_days = \"soon\"\n").unwrap();

        assert!(matches!(
            KindredConfig::load_from(&path),
            Err(KindredError::Config(_))
        ));
    }
}
