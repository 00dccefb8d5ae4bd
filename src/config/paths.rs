//! Path management for the ATM simulator
//!
//! Only the settings file lives on disk; account data is never persisted.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--config-dir` flag)
//! 2. `ATM_SIM_CONFIG_DIR` environment variable (if set)
//! 3. The platform config directory from `directories`
//!    (e.g. `~/.config/atm-sim` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::AtmError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ATM_SIM_CONFIG_DIR";

/// Manages all paths used by the ATM simulator
#[derive(Debug, Clone)]
pub struct AtmPaths {
    config_dir: PathBuf,
}

impl AtmPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform config
    /// directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, AtmError> {
        if let Some(dir) = explicit {
            return Ok(Self::with_config_dir(dir));
        }

        if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            if !custom.is_empty() {
                return Ok(Self::with_config_dir(PathBuf::from(custom)));
            }
        }

        let dirs = ProjectDirs::from("", "", "atm-sim").ok_or_else(|| {
            AtmError::Config("Could not determine a config directory".into())
        })?;
        Ok(Self::with_config_dir(dirs.config_dir().to_path_buf()))
    }

    /// Create AtmPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), AtmError> {
        std::fs::create_dir_all(&self.config_dir).map_err(|e| {
            AtmError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
