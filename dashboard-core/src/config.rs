use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Units;

/// Runtime configuration.
///
/// The defaults reproduce the fixed parameters the dashboard ships with; a
/// TOML file in the platform config directory overrides them field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location query string sent to the API, e.g. "Mumbai,IN".
    #[serde(default = "default_location")]
    pub location: String,

    /// Label used in the title banner. Deliberately independent of the
    /// location name reported back by the API.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    #[serde(default)]
    pub units: Units,

    /// Static OpenWeatherMap credential.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Current-weather endpoint. Overridable so tests can point at a mock
    /// server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the rendered image is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Hand the saved image to the system viewer after a successful render.
    #[serde(default = "default_true")]
    pub open_viewer: bool,
}

fn default_location() -> String {
    "Mumbai,IN".to_string()
}

fn default_display_name() -> String {
    "Mumbai".to_string()
}

fn default_api_key() -> String {
    "f37cc4ce5484cee326635b86c1cf0db4".to_string()
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("mumbai_weather_dashboard.png")
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: default_location(),
            display_name: default_display_name(),
            units: Units::default(),
            api_key: default_api_key(),
            base_url: default_base_url(),
            output_path: default_output_path(),
            open_viewer: default_true(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the built-in defaults if no file
    /// exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }
}
