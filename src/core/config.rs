use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Override for the store location; defaults to the platform data dir.
    pub data_path: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no config file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "dcaplan", "dcaplan")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "dcaplan", "dcaplan")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let config: AppConfig = serde_yaml::from_str("data_path: \"/tmp/dcaplan\"").unwrap();
        assert_eq!(config.data_path.as_deref(), Some("/tmp/dcaplan"));

        let config: AppConfig = serde_yaml::from_str("data_path: ~").unwrap();
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_custom_data_path_wins() {
        let config = AppConfig {
            data_path: Some("/tmp/elsewhere".to_string()),
        };
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/elsewhere"));
    }
}
