//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TMDB response language.
const DEFAULT_LANGUAGE: &str = "en-US";

/// Connection settings for one remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// API key.
    pub api_key: String,
    /// Base URL, without a trailing slash.
    pub base_url: String,
}

/// TMDB configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(flatten)]
    pub service: ServiceConfig,
    /// Language for search results.
    pub language: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Movie catalog.
    pub tmdb: TmdbConfig,
    /// Series catalog.
    pub sonarr: ServiceConfig,
    /// Movie library manager.
    pub radarr: ServiceConfig,
}

/// A config section as written by the user; every field may be absent.
#[derive(Debug, Default, Deserialize)]
struct RawSection {
    api_key: Option<String>,
    base_url: Option<String>,
    language: Option<String>,
}

/// Wrapper for parsing the config file sections.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    tmdb: Option<RawSection>,
    sonarr: Option<RawSection>,
    radarr: Option<RawSection>,
}

impl RawSection {
    fn validate(self, name: &str) -> Result<(ServiceConfig, Option<String>)> {
        let api_key = required(self.api_key, name, "api_key")?;
        let base_url = required(self.base_url, name, "base_url")?;
        Ok((
            ServiceConfig {
                api_key,
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            self.language,
        ))
    }
}

fn required(value: Option<String>, section: &str, field: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Config(format!("[{}] {} is missing", section, field))),
    }
}

fn section(raw: Option<RawSection>, name: &str) -> Result<RawSection> {
    raw.ok_or_else(|| Error::Config(format!("section [{}] is missing", name)))
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;

        let (tmdb, language) = section(raw.tmdb, "tmdb")?.validate("tmdb")?;
        let (sonarr, _) = section(raw.sonarr, "sonarr")?.validate("sonarr")?;
        let (radarr, _) = section(raw.radarr, "radarr")?.validate("radarr")?;

        Ok(Self {
            tmdb: TmdbConfig {
                service: tmdb,
                language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            },
            sonarr,
            radarr,
        })
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("poster_sorter")
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        return Err(Error::ConfigNotFound(config_path.display().to_string()));
    }

    let content = std::fs::read_to_string(&config_path)?;
    let config = Config::from_toml(&content)?;
    tracing::debug!("Loaded configuration from {}", config_path.display());
    Ok(config)
}
