//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Language for detail and credits responses.
    pub language: String,
    /// API base URL.
    pub base_url: String,
    /// Image host base URL.
    pub image_base_url: String,
    /// Request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: "en-US".to_string(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            timeout_secs: None,
        }
    }
}

impl TmdbConfig {
    /// Config with the given key and every other field defaulted.
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// The configured key, or `TmdbApiKeyMissing`.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(crate::Error::TmdbApiKeyMissing)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_browser")
}

/// Load configuration from the user config directory.
///
/// `TMDB_API_KEY` overrides any key in the file.
pub fn load_config() -> Result<Config> {
    let mut config = load_config_from(&dirs_config_path().join("config.toml"))?;
    config.tmdb.apply_env();
    Ok(config)
}

/// Load configuration from a file, defaulting when it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
