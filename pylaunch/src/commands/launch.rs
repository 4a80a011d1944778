//! `pylaunch` (default): run the entry point, then pause.

use pylaunch_runtime::{launch, LaunchSettings, StdinAcknowledger};

/// Run one launch. The child's exit status is logged, not returned: the
/// launcher's own exit status does not depend on it.
pub fn cmd_launch(settings: &LaunchSettings) {
    let outcome = launch(settings, &mut StdinAcknowledger);
    match outcome.child {
        Ok(exit) => tracing::debug!(
            code = ?exit.code,
            success = exit.success,
            paused = outcome.paused,
            "Launch finished"
        ),
        Err(e) => tracing::debug!(
            program = %e.program().display(),
            error = %e,
            paused = outcome.paused,
            "Launch failed"
        ),
    }
}
