//! The launch sequence: resolve, run once, pause.

use std::path::PathBuf;

use pylaunch_core::config::PauseMode;

use crate::error::LaunchError;
use crate::interpreter::LaunchLayout;
use crate::pause::{should_pause, stdin_is_terminal, Acknowledge};
use crate::runner::{run_child, ChildExit, LaunchPlan};

/// Inputs of one launch, fully resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Absolute base directory; every relative lookup is made against it
    pub base_dir: PathBuf,
    pub layout: LaunchLayout,
    pub pause: PauseMode,
}

impl LaunchSettings {
    pub fn plan(&self) -> LaunchPlan {
        LaunchPlan::resolve(&self.base_dir, &self.layout)
    }
}

/// What happened during a launch.
#[derive(Debug)]
pub struct LaunchOutcome {
    pub plan: LaunchPlan,
    /// Child exit, or why it could not be started
    pub child: Result<ChildExit, LaunchError>,
    /// Whether the acknowledgment step ran
    pub paused: bool,
}

/// Run the entry point once, then wait for acknowledgment if the pause mode asks for it.
///
/// Never fails: a spawn failure is printed to stderr and recorded in the
/// outcome, and the pause step still runs. The child's exit status is
/// recorded but not turned into an error.
pub fn launch<A>(settings: &LaunchSettings, ack: &mut A) -> LaunchOutcome
where
    A: Acknowledge + ?Sized,
{
    let plan = settings.plan();
    let child = run_child(&plan);
    if let Err(ref e) = child {
        eprintln!("{}", e);
    }

    let paused = should_pause(settings.pause, stdin_is_terminal());
    if paused {
        if let Err(e) = ack.acknowledge() {
            tracing::warn!("Pause prompt failed: {}", e);
        }
    } else {
        tracing::debug!(mode = %settings.pause, "Skipping pause");
    }

    LaunchOutcome {
        plan,
        child,
        paused,
    }
}
