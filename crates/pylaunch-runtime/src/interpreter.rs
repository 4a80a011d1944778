//! Resolve which interpreter runs the entry point: the environment directory's
//! own interpreter when that directory exists, otherwise the ambient one on `PATH`.

use serde::Serialize;
use std::path::{Path, PathBuf};

use pylaunch_core::config::LayoutConfig;

/// POSIX venv layout: `<env>/bin/python`
const POSIX_INTERPRETER: &[&str] = &["bin", "python"];
/// Windows venv layout: `<env>/Scripts/python.exe`
const WINDOWS_INTERPRETER: &[&str] = &["Scripts", "python.exe"];

/// Where the interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpreterSource {
    /// Inside the environment directory under the base directory
    Environment,
    /// Found through the executable search path
    Ambient,
}

/// Names of the files the launcher looks for under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    pub env_dir_name: String,
    pub entry_point: String,
    pub fallback_interpreter: String,
}

impl Default for LaunchLayout {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for LaunchLayout {
    fn from(cfg: &LayoutConfig) -> Self {
        Self {
            env_dir_name: cfg.env_dir.clone(),
            entry_point: cfg.entry_point.clone(),
            fallback_interpreter: cfg.interpreter.clone(),
        }
    }
}

/// Interpreter chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInterpreter {
    /// Absolute path for environment interpreters, bare program name for ambient ones
    pub program: PathBuf,
    pub source: InterpreterSource,
    /// Environment directory, set only when `source` is `Environment`
    pub env_dir: Option<PathBuf>,
}

/// Pick the interpreter for `base_dir`.
///
/// Only the existence of the environment directory decides precedence. When it
/// exists the interpreter inside it is used even if that file is missing, so a
/// broken environment fails loudly instead of silently running the ambient one.
pub fn resolve_interpreter(base_dir: &Path, layout: &LaunchLayout) -> ResolvedInterpreter {
    let env_dir = base_dir.join(&layout.env_dir_name);
    if env_dir.is_dir() {
        let program = env_interpreter_path(&env_dir);
        tracing::debug!(
            env_dir = %env_dir.display(),
            program = %program.display(),
            "Environment directory found"
        );
        return ResolvedInterpreter {
            program,
            source: InterpreterSource::Environment,
            env_dir: Some(env_dir),
        };
    }

    tracing::debug!(
        env_dir = %env_dir.display(),
        fallback = %layout.fallback_interpreter,
        "No environment directory, using ambient interpreter"
    );
    ResolvedInterpreter {
        program: PathBuf::from(&layout.fallback_interpreter),
        source: InterpreterSource::Ambient,
        env_dir: None,
    }
}

/// Interpreter path inside `env_dir`: the first existing of `bin/python` and
/// `Scripts/python.exe`, or the platform-native one when neither exists.
pub fn env_interpreter_path(env_dir: &Path) -> PathBuf {
    let candidates = [
        join_all(env_dir, POSIX_INTERPRETER),
        join_all(env_dir, WINDOWS_INTERPRETER),
    ];
    if let Some(found) = candidates.iter().find(|p| p.exists()) {
        return found.clone();
    }
    if cfg!(windows) {
        join_all(env_dir, WINDOWS_INTERPRETER)
    } else {
        join_all(env_dir, POSIX_INTERPRETER)
    }
}

/// Look the ambient interpreter up on `PATH`, for diagnostics only.
/// Spawning still goes through the OS search so its error is the one reported.
pub fn locate_ambient(program: &Path) -> Option<PathBuf> {
    which::which(program).ok()
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |acc, p| acc.join(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn layout() -> LaunchLayout {
        LaunchLayout::default()
    }

    #[test]
    fn test_no_env_dir_uses_ambient() {
        let tmp = tempfile::tempdir().unwrap();
        let resolved = resolve_interpreter(tmp.path(), &layout());
        assert_eq!(resolved.source, InterpreterSource::Ambient);
        assert_eq!(resolved.program, PathBuf::from("python"));
        assert_eq!(resolved.env_dir, None);
    }

    #[test]
    fn test_env_dir_with_posix_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("venv").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python"), "").unwrap();

        let resolved = resolve_interpreter(tmp.path(), &layout());
        assert_eq!(resolved.source, InterpreterSource::Environment);
        assert_eq!(resolved.program, bin.join("python"));
        assert_eq!(resolved.env_dir, Some(tmp.path().join("venv")));
    }

    #[test]
    fn test_env_dir_with_windows_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let scripts = tmp.path().join("venv").join("Scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(scripts.join("python.exe"), "").unwrap();

        let resolved = resolve_interpreter(tmp.path(), &layout());
        assert_eq!(resolved.source, InterpreterSource::Environment);
        assert_eq!(resolved.program, scripts.join("python.exe"));
    }

    #[test]
    fn test_empty_env_dir_still_takes_precedence() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("venv")).unwrap();

        let resolved = resolve_interpreter(tmp.path(), &layout());
        assert_eq!(resolved.source, InterpreterSource::Environment);
        assert!(resolved.program.starts_with(tmp.path().join("venv")));
        if cfg!(windows) {
            assert!(resolved.program.ends_with("Scripts/python.exe"));
        } else {
            assert!(resolved.program.ends_with("bin/python"));
        }
    }

    #[test]
    fn test_env_name_that_is_a_file_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("venv"), "not a directory").unwrap();

        let resolved = resolve_interpreter(tmp.path(), &layout());
        assert_eq!(resolved.source, InterpreterSource::Ambient);
    }

    #[test]
    fn test_custom_layout_names() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".venv").join("bin")).unwrap();
        let custom = LaunchLayout {
            env_dir_name: ".venv".to_string(),
            entry_point: "app.py".to_string(),
            fallback_interpreter: "python3".to_string(),
        };

        assert_eq!(
            resolve_interpreter(tmp.path(), &custom).source,
            InterpreterSource::Environment
        );
        // Default name "venv" does not exist here
        assert_eq!(
            resolve_interpreter(tmp.path(), &layout()).source,
            InterpreterSource::Ambient
        );
    }

    #[test]
    fn test_locate_ambient_missing_program() {
        assert_eq!(
            locate_ambient(Path::new("pylaunch-no-such-interpreter-4e1b")),
            None
        );
    }
}
