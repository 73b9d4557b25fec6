//! Estimator configuration.
//!
//! Loaded from a TOML file with every section optional:
//!
//! ```toml
//! language = "es"
//!
//! [risk]
//! duration_threshold_days = 120
//!
//! [server]
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{EstimateError, EstimateResult};
use crate::risk::RiskModel;

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "SPAR_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "spar.toml";

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl std::str::FromStr for Language {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" => Ok(Self::Es),
            other => Err(EstimateError::Config(format!(
                "unknown language '{}'. Valid languages: en, es",
                other
            ))),
        }
    }
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

impl ServerConfig {
    /// Apply `SPAR_HOST` / `SPAR_PORT` overrides.
    pub fn with_env_overrides(mut self) -> EstimateResult<Self> {
        if let Ok(host) = std::env::var("SPAR_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("SPAR_PORT") {
            self.port = port
                .parse()
                .map_err(|_| {
                    EstimateError::Config(format!("SPAR_PORT is not a valid port: '{}'", port))
                })?;
        }
        Ok(self)
    }

    /// `host:port` string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete configuration for the estimators and adapters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub language: Language,
    pub risk: RiskModel,
    pub server: ServerConfig,
}

impl EstimatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> EstimateResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.risk.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> EstimateResult<String> {
        toml::to_string_pretty(self).map_err(|e| EstimateError::Config(e.to_string()))
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> EstimateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EstimateError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded configuration file");
        Self::from_toml(&content)
    }

    /// Resolve the config source and load it.
    ///
    /// Precedence: explicit path, then `$SPAR_CONFIG`, then `spar.toml` in
    /// `dir` if it exists, then built-in defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> EstimateResult<Self> {
        match resolve_path(explicit, dir) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

fn resolve_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = dir.join(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}
