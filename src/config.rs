//! Application configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::consts::screener_consts::data as data_consts;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the precomputed dataset file.
    pub data_file: PathBuf,
    /// External computation command, as program + arguments.
    pub refresh_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: Path::new(data_consts::DATA_DIR).join(data_consts::DEFAULT_FILE_NAME),
            refresh_command: data_consts::DEFAULT_REFRESH_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Path of the user configuration file, `~/.sharpe-screener/config.json`.
///
/// # Errors
/// Returns an `std::io::Error` if no home directory can be determined.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })?;
    Ok(home.join(".sharpe-screener").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration at `path`, falling back to the defaults when
    /// the file is absent or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Config::load_from_file(path).unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
