//! Configuration management using config.toml

use emusak_core::{EmusakError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Emulator installation directories, in display order
    #[serde(default)]
    pub emulators: Vec<PathBuf>,

    /// Custom title database: JSON `{ "<title id>": "<name>" }`
    #[serde(default)]
    pub custom_db: Option<PathBuf>,

    /// Tinfoil `titles.json`
    #[serde(default)]
    pub tinfoil_db: Option<PathBuf>,

    /// NSWDB XML release list
    #[serde(default)]
    pub nswdb_db: Option<PathBuf>,

    /// Shader counts per title ID (JSON)
    #[serde(default)]
    pub shaders_catalog: Option<PathBuf>,

    /// Save counts per title ID (JSON)
    #[serde(default)]
    pub saves_catalog: Option<PathBuf>,

    /// Latest firmware version available for download; downloads stay disabled while unset
    #[serde(default)]
    pub firmware_version: Option<String>,
}

impl Config {
    /// Where the app keeps its configuration, relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_PATH)
    }

    /// Load config from `config.toml`, creating a default one if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match Self::read(path) {
                Ok(config) => return config,
                Err(e) => tracing::error!("Error loading {}: {}", path.display(), e),
            }
            // Keep the broken file around for the user to fix
            return Config::default();
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not create {}: {}", path.display(), e);
        }
        config
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| EmusakError::config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| EmusakError::config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Forget an emulator installation. Returns whether it was configured.
    pub fn remove_emulator(&mut self, path: &Path) -> bool {
        let before = self.emulators.len();
        self.emulators.retain(|p| p != path);
        self.emulators.len() != before
    }

    pub fn firmware_version(&self) -> Option<&str> {
        self.firmware_version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_config_toml_in_working_dir() {
        assert_eq!(Config::default_path(), PathBuf::from(CONFIG_PATH));
        assert!(Config::default_path().is_relative());
    }

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            emulators: vec![PathBuf::from("/opt/ryujinx")],
            tinfoil_db: Some(PathBuf::from("titles.json")),
            firmware_version: Some("17.0.1".into()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn broken_file_falls_back_to_defaults_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "emulators = [").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "emulators = [");
    }

    #[test]
    fn remove_emulator_drops_only_that_path() {
        let mut config = Config {
            emulators: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            ..Default::default()
        };
        assert!(config.remove_emulator(Path::new("/a")));
        assert!(!config.remove_emulator(Path::new("/a")));
        assert_eq!(config.emulators, vec![PathBuf::from("/b")]);
    }
}
