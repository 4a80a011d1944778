//! Launch plan and child process execution.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::LaunchError;
use crate::interpreter::{locate_ambient, resolve_interpreter, InterpreterSource, LaunchLayout, ResolvedInterpreter};

/// Everything needed to start the child, computed before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    /// Working directory of the child and root of every relative lookup
    pub base_dir: PathBuf,
    pub interpreter: ResolvedInterpreter,
    /// Entry point as passed to the interpreter (relative to `base_dir`)
    pub entry_point: PathBuf,
}

impl LaunchPlan {
    pub fn resolve(base_dir: &Path, layout: &LaunchLayout) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            interpreter: resolve_interpreter(base_dir, layout),
            entry_point: PathBuf::from(&layout.entry_point),
        }
    }

    /// Absolute location of the entry point.
    pub fn entry_point_path(&self) -> PathBuf {
        self.base_dir.join(&self.entry_point)
    }

    /// The command to spawn. Stdio is inherited; nothing beyond the entry point is passed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter.program);
        cmd.arg(&self.entry_point).current_dir(&self.base_dir);
        cmd
    }
}

/// How the child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChildExit {
    /// `None` when the child was terminated by a signal
    pub code: Option<i32>,
    pub success: bool,
}

/// Spawn the planned child with inherited stdio and block until it exits.
pub fn run_child(plan: &LaunchPlan) -> Result<ChildExit, LaunchError> {
    let program = plan.interpreter.program.clone();

    if plan.interpreter.source == InterpreterSource::Ambient {
        match locate_ambient(&program) {
            Some(found) => tracing::debug!(program = %found.display(), "Ambient interpreter on PATH"),
            None => tracing::debug!(program = %program.display(), "Ambient interpreter not on PATH"),
        }
    }
    if !plan.entry_point_path().exists() {
        tracing::debug!(
            entry_point = %plan.entry_point_path().display(),
            "Entry point missing, leaving the report to the interpreter"
        );
    }

    tracing::info!(
        program = %program.display(),
        source = ?plan.interpreter.source,
        entry_point = %plan.entry_point.display(),
        base_dir = %plan.base_dir.display(),
        "Starting entry point"
    );

    let mut child = plan.command().spawn().map_err(|e| spawn_error(&program, e))?;
    let status = child.wait().map_err(|source| LaunchError::Wait {
        program: program.clone(),
        source,
    })?;

    let exit = ChildExit {
        code: status.code(),
        success: status.success(),
    };
    if exit.success {
        tracing::info!(code = ?exit.code, "Entry point finished");
    } else {
        tracing::warn!(code = ?exit.code, "Entry point exited with failure");
    }
    Ok(exit)
}

/// A missing or non-executable interpreter is "not found"; anything else is a spawn failure.
fn spawn_error(program: &Path, err: io::Error) -> LaunchError {
    if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) {
        LaunchError::InterpreterNotFound {
            program: program.to_path_buf(),
        }
    } else {
        LaunchError::Spawn {
            program: program.to_path_buf(),
            source: err,
        }
    }
}
