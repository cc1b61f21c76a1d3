//! Configuration file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths;
use crate::error::{Result, SigmaError};

use super::models::Config;

/// Handles reading and writing the YAML configuration file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a new store using the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get the default config file path.
    /// $XDG_CONFIG_HOME/sigmactl/config.yaml on Unix, %APPDATA%\sigmactl\config.yaml on Windows.
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::DIR_NAME)
            .join(paths::FILE_NAME)
    }

    /// Load the configuration from disk.
    /// Returns Default if the file doesn't exist or is empty, errors on corrupt YAML.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            debug!(
                "Config file {} not found, using empty config",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            SigmaError::Config(format!(
                "Failed to read config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            SigmaError::Config(format!(
                "Failed to parse config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save the whole configuration to disk with owner-only permissions.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SigmaError::Persistence(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let yaml = serde_yml::to_string(config)
            .map_err(|e| SigmaError::Persistence(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, &yaml).map_err(|e| {
            SigmaError::Persistence(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(SigmaError::Persistence(format!(
                    "Failed to set permissions on config file: {}",
                    e
                )));
            }
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            SigmaError::Persistence(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Wrote config file {}", self.config_path.display());
        Ok(())
    }
}
