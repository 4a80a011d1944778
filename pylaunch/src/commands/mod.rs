//! Command handlers. Both resolve the same `LaunchPlan`; only `launch` spawns.

pub mod launch;
pub mod plan;
