use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NaengmyeonConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// `"stdio"` or `"http"`.
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding restaurants.json, lineages.json, eating_guides.json
    /// and side_menus.json.
    pub data_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        let data_dir = default_naengmyeon_dir()
            .join("data")
            .to_string_lossy()
            .into_owned();
        Self { data_dir }
    }
}

/// Returns `~/.naengmyeon/`, or `./.naengmyeon/` when no home directory is known.
pub fn default_naengmyeon_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".naengmyeon")
}

/// Returns the default config file path: `~/.naengmyeon/config.toml`
pub fn default_config_path() -> PathBuf {
    default_naengmyeon_dir().join("config.toml")
}

impl NaengmyeonConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            NaengmyeonConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (NAENGMYEON_DATA, NAENGMYEON_LOG_LEVEL,
    /// NAENGMYEON_TRANSPORT, PORT).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NAENGMYEON_DATA") {
            self.data.data_dir = val;
        }
        if let Ok(val) = std::env::var("NAENGMYEON_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("NAENGMYEON_TRANSPORT") {
            self.server.transport = val;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Resolve the data directory, expanding `~` if needed.
    pub fn resolved_data_dir(&self) -> PathBuf {
        expand_tilde(&self.data.data_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
