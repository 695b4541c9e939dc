use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_FEEDBACKS_BASE_URL: &str = "https://feedbacks-api.wildberries.ru";
pub const DEFAULT_RETURNS_BASE_URL: &str = "https://returns-api.wildberries.ru";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Stdio,
    Server,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Stdio => "stdio",
            Mode::Server => "server",
        })
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Mode::Stdio),
            "server" => Ok(Mode::Server),
            other => Err(format!("Invalid MODE: {other}. Must be 'server' or 'stdio'")),
        }
    }
}

/// Outbound HTTP settings for the Wildberries API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub feedbacks_base_url: String,
    pub returns_base_url: String,
    pub connect_timeout_ms: u64,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            feedbacks_base_url: DEFAULT_FEEDBACKS_BASE_URL.into(),
            returns_base_url: DEFAULT_RETURNS_BASE_URL.into(),
            connect_timeout_ms: 5_000,
            timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub mode: Mode,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { mode: Mode::Stdio, port: 8080 }
    }
}

/// Layered configuration: defaults, then an optional TOML file, then env.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("{0}")]
    Invalid(String),
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
    }

    /// Load from `path` (or `WB_MCP_CONFIG`) and apply environment overrides.
    /// Not validated; call [`AppConfig::validate`] once every override is in.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os("WB_MCP_CONFIG").map(PathBuf::from);
        let mut cfg = match path.map(Path::to_owned).or(from_env) {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        cfg.apply_env()?;
        Ok(cfg)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(mode) = std::env::var("MODE") {
            self.server.mode = mode.parse().map_err(ConfigError::Invalid)?;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Ok(url) = std::env::var("WB_FEEDBACKS_BASE_URL") {
            if !url.trim().is_empty() {
                self.api.feedbacks_base_url = url;
            }
        }
        if let Ok(url) = std::env::var("WB_RETURNS_BASE_URL") {
            if !url.trim().is_empty() {
                self.api.returns_base_url = url;
            }
        }
        if let Some(ms) = env_u64("WB_HTTP_TIMEOUT_MS") {
            self.api.timeout_ms = ms;
        }
        if let Some(ms) = env_u64("WB_HTTP_CONNECT_TIMEOUT_MS") {
            self.api.connect_timeout_ms = ms;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.mode == Mode::Server && self.server.port == 0 {
            return Err(ConfigError::Invalid("PORT cannot be 0".into()));
        }
        for url in [&self.api.feedbacks_base_url, &self.api.returns_base_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!("base URL must be http(s): {url}")));
            }
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms cannot be 0".into()));
        }
        Ok(())
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.parse::<u64>().ok())
}
