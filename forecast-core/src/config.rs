use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://api.forecast-data.org/v1";
pub const DEFAULT_KEY_FILE: &str = "../key.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Where and how to reach the forecast API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,

    /// File holding the API key, read fresh on every run.
    pub key_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory fetched datasets are written to.
    pub dir: Option<PathBuf>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [api]
/// base_url = "https://..."
/// key_file = "/home/me/.forecast-key"
///
/// [output]
/// dir = "data"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Values supplied on the command line or through the environment.
/// Each one that is set replaces the value from the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub key_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn key_file(&self) -> PathBuf {
        self.api
            .key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_FILE))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.base_url {
            self.api.base_url = Some(url);
        }
        if let Some(path) = overrides.key_file {
            self.api.key_file = Some(path);
        }
        if let Some(dir) = overrides.output_dir {
            self.output.dir = Some(dir);
        }
    }

    /// Load config from the platform config directory, or return the
    /// defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
