//! Bridge configuration, read from `<config_dir>/psbridge/config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Workspace;

pub const APP_DIR: &str = "psbridge";
pub const CONFIG_FILE: &str = "config.json";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PSBRIDGE_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Used when `PSBRIDGE_LOG` is unset.
    pub log_filter: String,
    /// Workspace snapshot loaded for dry runs.
    pub fixture: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            fixture: None,
            pretty: true,
        }
    }
}

impl BridgeConfig {
    /// Load from `explicit`, or from the default location. A missing default
    /// file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => read_json(path),
            None => match default_path() {
                Some(path) if path.exists() => read_json(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `PSBRIDGE_LOG` wins over the configured filter.
    pub fn effective_log_filter(&self) -> String {
        std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.log_filter.clone())
    }
}

pub fn default_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
    let home = PathBuf::from(home);
    if cfg!(target_os = "macos") {
        Some(home.join("Library/Application Support"))
    } else {
        Some(home.join(".config"))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a workspace snapshot, e.g. one captured from a live host.
pub fn load_fixture(path: &Path) -> Result<Workspace, ConfigError> {
    read_json(path)
}
