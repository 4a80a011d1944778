//! Typed configuration, grouped by concern.

use super::env_keys::{layout as layout_keys, observability as obv_keys};
use super::loader::EnvSource;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default environment directory name.
pub const DEFAULT_ENV_DIR: &str = "venv";
/// Default entry-point file.
pub const DEFAULT_ENTRY_POINT: &str = "main.py";
/// Default interpreter searched on `PATH`.
pub const DEFAULT_INTERPRETER: &str = "python";
/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "pylaunch=warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid pause mode '{0}' (expected always, never or auto)")]
    InvalidPauseMode(String),
}

/// When to wait for the user after the child exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Always wait for acknowledgment
    #[default]
    Always,
    /// Never wait (CI / scripted use)
    Never,
    /// Wait only when stdin is an interactive terminal
    Auto,
}

impl FromStr for PauseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "1" | "true" | "yes" => Ok(Self::Always),
            "never" | "0" | "false" | "no" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(ConfigError::InvalidPauseMode(s.to_string())),
        }
    }
}

impl fmt::Display for PauseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        })
    }
}

/// What to run and where to look for it under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub env_dir: String,
    pub entry_point: String,
    pub interpreter: String,
    pub pause: PauseMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            env_dir: DEFAULT_ENV_DIR.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            pause: PauseMode::Always,
        }
    }
}

impl LayoutConfig {
    /// Load from `src`. An unparseable pause mode logs a warning and keeps the default.
    pub fn from_source(src: &EnvSource) -> Self {
        let pause = match src.env_optional(layout_keys::PYLAUNCH_PAUSE) {
            Some(raw) => raw.parse::<PauseMode>().unwrap_or_else(|e| {
                tracing::warn!("{}: {}, using default (always)", layout_keys::PYLAUNCH_PAUSE, e);
                PauseMode::Always
            }),
            None => PauseMode::Always,
        };
        Self {
            env_dir: src.env_or(layout_keys::PYLAUNCH_ENV_DIR, || DEFAULT_ENV_DIR.to_string()),
            entry_point: src.env_or(layout_keys::PYLAUNCH_ENTRY_POINT, || {
                DEFAULT_ENTRY_POINT.to_string()
            }),
            interpreter: src.env_or(layout_keys::PYLAUNCH_INTERPRETER, || {
                DEFAULT_INTERPRETER.to_string()
            }),
            pause,
        }
    }
}

/// Logging configuration: quiet, log_level, log_json
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_source(src: &EnvSource) -> Self {
        Self {
            quiet: src.env_bool(obv_keys::PYLAUNCH_QUIET, false),
            log_level: src.env_or(obv_keys::PYLAUNCH_LOG_LEVEL, || DEFAULT_LOG_LEVEL.to_string()),
            log_json: src.env_bool(obv_keys::PYLAUNCH_LOG_JSON, false),
        }
    }
}
