use crate::domain::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub musixmatch: MusixmatchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    pub key: String,
    pub url: String,
    #[serde(default = "default_translator_host")]
    pub host: String,
    #[serde(default = "default_language")]
    pub to: String,
    /// Skip TLS certificate verification for the translator only.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MusixmatchConfig {
    pub key: String,
    pub search_url: String,
    #[serde(default = "default_language")]
    pub lyrics_language: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FilterConfig {
    #[serde(default = "default_exclude_marker")]
    pub exclude_marker: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_marker: default_exclude_marker(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Sample written by `--generate-config`
    pub fn sample() -> Self {
        Self {
            translator: TranslatorConfig {
                key: "<rapidapi key>".to_string(),
                url: "https://microsoft-translator-text.p.rapidapi.com/translate".to_string(),
                host: default_translator_host(),
                to: default_language(),
                accept_invalid_certs: false,
            },
            musixmatch: MusixmatchConfig {
                key: "<musixmatch key>".to_string(),
                search_url: "https://api.musixmatch.com/ws/1.1/track.search".to_string(),
                lyrics_language: default_language(),
            },
            filter: FilterConfig::default(),
            http: HttpConfig::default(),
            logging: Logging::default(),
        }
    }

    /// A zero timeout would make every request fail at once
    fn validate(&self) -> Result<(), String> {
        if self.http.timeout_secs == 0 {
            return Err("http.timeout_secs must be greater than 0".to_string());
        }
        if self.http.connect_timeout_secs == 0 {
            return Err("http.connect_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

// Defaults
fn default_translator_host() -> String {
    "microsoft-translator-text.p.rapidapi.com".to_string()
}
fn default_language() -> String {
    "te".to_string()
}
fn default_exclude_marker() -> String {
    "Hits".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_connect_timeout_secs() -> u64 {
    10
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Per-user fallback: ~/.config/telugu-songs/config.toml (Linux)
pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("telugu-songs").join(DEFAULT_CONFIG_FILE))
}

/// Resolve the path to read. An explicit path is used as is; an empty one
/// falls back to `config.toml`, then to the per-user config file if only
/// that one exists.
pub fn resolve_config_path(path: Option<&str>) -> PathBuf {
    resolve_with_fallback(path, get_user_config_path())
}

fn resolve_with_fallback(path: Option<&str>, user_config: Option<PathBuf>) -> PathBuf {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if local.exists() {
                return local;
            }
            match user_config {
                Some(user) if user.exists() => user,
                _ => local,
            }
        }
    }
}

pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = resolve_config_path(path);
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str::<Config>(&content)
        .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
    config
        .validate()
        .map_err(|reason| ConfigError::Invalid { path: path.clone(), reason })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn generate_config_sample(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let toml_content = toml::to_string_pretty(&Config::sample())?;
    fs::write(path, toml_content).map_err(io_err)?;
    Ok(())
}
