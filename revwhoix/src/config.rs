use crate::error::AppError;
use librevwhois::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_KEY_FILE: &str = "~/.config/whoisxml.conf";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// File holding the API key; a leading `~` is the home directory.
    #[serde(default = "default_key_file")]
    pub key_file: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

fn default_key_file() -> String {
    DEFAULT_KEY_FILE.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("revwhoix").join("config.toml"))
}

pub fn load_config() -> Config {
    config_path()
        .map(|path| load_config_from(&path))
        .unwrap_or_default()
}

/// Missing files fall back to defaults silently, unparsable ones with a warning.
pub fn load_config_from(path: &Path) -> Config {
    let Ok(content) = std::fs::read_to_string(path) else {
        debug!(path = %path.display(), "No config file, using defaults");
        return Config::default();
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), "Ignoring invalid config file: {}", e);
            Config::default()
        }
    }
}

pub fn get_default_config_toml() -> String {
    format!(
        r#"# revwhoix configuration

[api]
# File containing the WhoisXML API key
key_file = "{DEFAULT_KEY_FILE}"

# Reverse WHOIS API endpoint
endpoint = "{DEFAULT_ENDPOINT}"

# Per-request timeout in seconds (no timeout when unset)
# timeout_secs = 60
"#
    )
}

pub fn write_default_config() -> Result<PathBuf, AppError> {
    let path = config_path().ok_or(AppError::NoConfigDir)?;
    let write_err = |source| AppError::ConfigWrite {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(&path, get_default_config_toml()).map_err(write_err)?;
    Ok(path)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> Result<PathBuf, AppError> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(path)),
    };

    let home = dirs::home_dir().ok_or(AppError::NoHomeDir)?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

/// Reads the API key: the whole file, trimmed.
pub fn read_api_key(path: &Path) -> Result<String, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::KeyFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let key = content.trim();
    if key.len() < 2 {
        return Err(AppError::KeyMissing {
            path: path.to_path_buf(),
        });
    }

    Ok(key.to_string())
}
