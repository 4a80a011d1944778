//! Run an entry-point program with the environment-local interpreter when one
//! exists, otherwise with the ambient interpreter, then wait for the user.

pub mod error;
pub mod interpreter;
pub mod launch;
pub mod pause;
pub mod runner;

pub use error::LaunchError;
pub use interpreter::{InterpreterSource, LaunchLayout, ResolvedInterpreter};
pub use launch::{launch, LaunchOutcome, LaunchSettings};
pub use pause::{Acknowledge, StdinAcknowledger};
pub use runner::{run_child, ChildExit, LaunchPlan};

#[cfg(test)]
mod test_support;
