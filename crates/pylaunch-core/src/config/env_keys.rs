//! Environment variable keys. All keys share the `PYLAUNCH_` prefix.

/// Launch layout: where to look and what to run
pub mod layout {
    /// Overrides the directory containing the launcher executable. Read by the
    /// CLI layer, since `<base>/.env` cannot relocate its own base.
    pub const PYLAUNCH_BASE_DIR: &str = "PYLAUNCH_BASE_DIR";
    /// Name of the environment directory under the base directory.
    pub const PYLAUNCH_ENV_DIR: &str = "PYLAUNCH_ENV_DIR";
    /// Entry-point file, relative to the base directory.
    pub const PYLAUNCH_ENTRY_POINT: &str = "PYLAUNCH_ENTRY_POINT";
    /// Interpreter looked up on `PATH` when no environment directory exists.
    pub const PYLAUNCH_INTERPRETER: &str = "PYLAUNCH_INTERPRETER";
    /// `always` | `never` | `auto`
    pub const PYLAUNCH_PAUSE: &str = "PYLAUNCH_PAUSE";
}

/// Logging
pub mod observability {
    pub const PYLAUNCH_QUIET: &str = "PYLAUNCH_QUIET";
    pub const PYLAUNCH_LOG_LEVEL: &str = "PYLAUNCH_LOG_LEVEL";
    pub const PYLAUNCH_LOG_JSON: &str = "PYLAUNCH_LOG_JSON";
}
