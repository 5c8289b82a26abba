use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MEDEVENTGEN_CONFIG";

const ENV_PREFIX: &str = "MEDEVENTGEN_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("Invalid Gemini base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the compiled frontend bundle (`index.html` + wasm).
    pub static_dir: Option<PathBuf>,
    /// Allow any origin, e.g. when the frontend is served by `trunk serve`.
    pub cors_permissive: bool,
}

/// Gemini provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Unset means requests may wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: None,
            cors_permissive: true,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(self.base_url.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }
}

impl AppConfig {
    /// Load from `$MEDEVENTGEN_CONFIG` or `~/.config/medeventgen/config.toml`,
    /// then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);
        Self::from_path(&path)
    }

    /// Load with an explicit config file. A missing file is not an error.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("Loading config from {}", path.display());
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
        }
        let config: AppConfig = Self::figment(path).extract()?;
        config.gemini.validate()?;
        if config.gemini.api_key.trim().is_empty() {
            log::warn!("No Gemini API key configured; generation requests will fail");
        }
        Ok(config)
    }

    /// Defaults < `API_KEY` < `GEMINI_API_KEY` < TOML file < `MEDEVENTGEN_*`.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::raw().only(&["API_KEY"]).map(|_| "gemini.api_key".into()))
            .merge(
                Env::raw()
                    .only(&["GEMINI_API_KEY"])
                    .map(|_| "gemini.api_key".into()),
            )
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]).split("__"))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("medeventgen").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
