//! Configuration management module.
//!
//! This module handles loading and saving application configuration:
//! theme selection, motion preferences, and the analytics toggle.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/quadrant-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub reduced_motion: bool,
    pub analytics_enabled: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default = "default_analytics_enabled")]
    pub analytics_enabled: bool,
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

fn default_analytics_enabled() -> bool {
    true
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            reduced_motion: false,
            analytics_enabled: true,
        }
    }

    /// Try to load an existing configuration from the disk using the
    /// custom path if provided. A missing file leaves the defaults in
    /// place; it is written on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.reduced_motion = data.reduced_motion;
            self.analytics_enabled = data.analytics_enabled;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            reduced_motion: self.reduced_motion,
            analytics_enabled: self.analytics_enabled,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the
    /// configuration file or an error if the home directory could not
    /// be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert!(!config.reduced_motion);
        assert!(config.analytics_enabled);
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }

    #[test]
    fn test_file_spec_defaults_fill_missing_fields() {
        let data: FileSpec = serde_yaml::from_str("theme_name: tokyo-night\n").unwrap();
        assert_eq!(data.theme_name, "tokyo-night");
        assert!(!data.reduced_motion);
        assert!(data.analytics_enabled);
    }
}
