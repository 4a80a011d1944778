//! Turn CLI flags, environment and `<base>/.env` into `LaunchSettings`.
//!
//! Precedence: CLI flag > process environment > `.env` > built-in default.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use pylaunch_core::config::{EnvSource, LayoutConfig, PauseMode};
use pylaunch_runtime::{LaunchLayout, LaunchSettings};

use crate::cli::Cli;

/// Base directory: the explicit one made absolute, or the directory holding
/// the running executable.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) if dir.is_absolute() => Ok(dir.to_path_buf()),
        Some(dir) => Ok(std::env::current_dir()
            .context("Read current directory")?
            .join(dir)),
        None => {
            let exe = std::env::current_exe().context("Locate launcher executable")?;
            exe.parent()
                .map(Path::to_path_buf)
                .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
        }
    }
}

/// Merge CLI overrides over the configured layout.
pub fn build_settings(cli: &Cli, base_dir: PathBuf, source: &EnvSource) -> LaunchSettings {
    let mut cfg = LayoutConfig::from_source(source);
    if let Some(ref env_dir) = cli.env_dir {
        cfg.env_dir = env_dir.clone();
    }
    if let Some(ref entry_point) = cli.entry_point {
        cfg.entry_point = entry_point.clone();
    }
    if let Some(ref interpreter) = cli.interpreter {
        cfg.interpreter = interpreter.clone();
    }
    if cli.no_pause {
        cfg.pause = PauseMode::Never;
    } else if let Some(pause) = cli.pause {
        cfg.pause = pause;
    }

    LaunchSettings {
        base_dir,
        layout: LaunchLayout::from(&cfg),
        pause: cfg.pause,
    }
}
