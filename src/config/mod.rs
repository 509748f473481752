use crate::pagination::DEFAULT_MAX_VISIBLE_PAGES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows shown per page in every list
    pub items_per_page: usize,

    /// Page buttons shown before the sequence collapses into ellipses
    pub max_visible_pages: usize,

    /// Simulated latency of the built-in data source
    #[serde(with = "humantime_serde_compat")]
    pub latency: Duration,

    /// Directory holding `<collection>.json` files; fixtures when unset
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            latency: Duration::from_millis(300),
            data_dir: None,
        }
    }
}

impl Config {
    /// Initialize configuration from the config file and the environment
    pub async fn init(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::find_file(explicit_path) {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.load_from_env()?;
        config.validate()?;
        debug!("Configuration resolved: {:?}", config);

        Ok(config)
    }

    /// Locate the configuration file
    ///
    /// Priority: the explicit path, `./.kalamna.json`, `./kalamna.json`,
    /// then `$CONFIG_DIR/kalamna/kalamna.json`.
    fn find_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit_path {
            return Some(path.to_path_buf());
        }

        let mut config_paths = vec![
            PathBuf::from("./.kalamna.json"),
            PathBuf::from("./kalamna.json"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("kalamna").join("kalamna.json"));
        }

        config_paths.into_iter().find(|path| path.exists())
    }

    /// Load configuration from a JSON file
    pub async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `KALAMNA_*` environment overrides
    pub fn load_from_env(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(value) = var("KALAMNA_ITEMS_PER_PAGE") {
            self.items_per_page = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "KALAMNA_ITEMS_PER_PAGE",
                value,
            })?;
        }

        if let Some(value) = var("KALAMNA_MAX_VISIBLE_PAGES") {
            self.max_visible_pages =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: "KALAMNA_MAX_VISIBLE_PAGES",
                    value,
                })?;
        }

        if let Some(value) = var("KALAMNA_LATENCY") {
            self.latency =
                humantime::parse_duration(value.trim()).map_err(|_| ConfigError::InvalidEnv {
                    name: "KALAMNA_LATENCY",
                    value,
                })?;
        }

        if let Some(value) = var("KALAMNA_DATA_DIR") {
            self.data_dir = (!value.trim().is_empty()).then(|| PathBuf::from(value.trim()));
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "items_per_page must be greater than 0".to_string(),
            ));
        }

        if self.max_visible_pages < DEFAULT_MAX_VISIBLE_PAGES {
            return Err(ConfigError::Invalid(format!(
                "max_visible_pages must be at least {}",
                DEFAULT_MAX_VISIBLE_PAGES
            )));
        }

        Ok(())
    }
}

/// `Duration` as a humantime string ("300ms", "1s") in config files
mod humantime_serde_compat {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let value = String::deserialize(deserializer)?;
        humantime::parse_duration(&value).map_err(D::Error::custom)
    }
}
