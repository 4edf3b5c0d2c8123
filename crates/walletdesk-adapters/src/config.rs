use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "WALLETDESK_CONFIG";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub network: Network,
    /// Where wallets are persisted. Falls back to the platform data dir.
    pub data_dir: Option<PathBuf>,
    pub toast_duration_ms: u64,
    pub dark_mode: bool,
    pub modal_max_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            data_dir: None,
            toast_duration_ms: 4_000,
            dark_mode: true,
            modal_max_width: 380.0,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "walletdesk", "walletdesk")
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Loads from `$WALLETDESK_CONFIG`, else the platform config file if
    /// present, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_with(explicit, Self::default_config_path())
    }

    pub fn load_with(
        explicit: Option<PathBuf>,
        fallback: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "loading config");
            return Self::load_from(&path);
        }
        match fallback {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf()))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "toast_duration_ms must be positive".to_owned(),
            ));
        }
        if !(self.modal_max_width.is_finite() && self.modal_max_width > 0.0) {
            return Err(ConfigError::Invalid(
                "modal_max_width must be a positive number".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"network": "testnet"}"#).expect("parse");
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.toast_duration_ms, 4_000);
        assert!(config.dark_mode);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = AppConfig::from_json(r#"{"colour": "red"}"#).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_toast_duration_is_invalid() {
        let err = AppConfig::from_json(r#"{"toast_duration_ms": 0}"#).expect_err("must fail");
        assert!(err.to_string().contains("toast_duration_ms"));
    }

    #[test]
    fn missing_fallback_gives_defaults() {
        let config =
            AppConfig::load_with(None, Some(PathBuf::from("/definitely/not/here.json")))
                .expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load_with(Some(PathBuf::from("/definitely/not/here.json")), None)
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/wd")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/tmp/wd")));
    }
}
