use std::path::PathBuf;
use thiserror::Error;

/// Failures of the launcher itself. Failures inside the child (including a
/// missing entry-point file) are reported by the interpreter, not here.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("interpreter not found: {}", program.display())]
    InterpreterNotFound { program: PathBuf },

    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for {}: {source}", program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Program the launcher tried to run.
    pub fn program(&self) -> &std::path::Path {
        match self {
            Self::InterpreterNotFound { program }
            | Self::Spawn { program, .. }
            | Self::Wait { program, .. } => program,
        }
    }
}
