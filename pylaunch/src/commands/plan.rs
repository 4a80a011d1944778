//! `pylaunch --print-plan`: show what would run, without running it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use pylaunch_core::config::PauseMode;
use pylaunch_runtime::interpreter::locate_ambient;
use pylaunch_runtime::{InterpreterSource, LaunchPlan, LaunchSettings};

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    plan: &'a LaunchPlan,
    pause: PauseMode,
    entry_point_exists: bool,
    interpreter_exists: bool,
    /// PATH hit for an ambient interpreter
    #[serde(skip_serializing_if = "Option::is_none")]
    ambient_path: Option<PathBuf>,
}

impl<'a> PlanReport<'a> {
    fn new(plan: &'a LaunchPlan, pause: PauseMode) -> Self {
        let ambient_path = match plan.interpreter.source {
            InterpreterSource::Ambient => locate_ambient(&plan.interpreter.program),
            InterpreterSource::Environment => None,
        };
        let interpreter_exists = match plan.interpreter.source {
            InterpreterSource::Ambient => ambient_path.is_some(),
            InterpreterSource::Environment => plan.interpreter.program.exists(),
        };
        Self {
            plan,
            pause,
            entry_point_exists: plan.entry_point_path().exists(),
            interpreter_exists,
            ambient_path,
        }
    }

    fn render_text(&self) -> String {
        let source = match self.plan.interpreter.source {
            InterpreterSource::Environment => "environment",
            InterpreterSource::Ambient => "ambient (PATH)",
        };
        let mut out = String::new();
        out.push_str(&format!("base dir:     {}\n", self.plan.base_dir.display()));
        out.push_str(&format!(
            "interpreter:  {} [{}]{}\n",
            self.plan.interpreter.program.display(),
            source,
            missing_marker(self.interpreter_exists)
        ));
        if let Some(ref found) = self.ambient_path {
            out.push_str(&format!("  resolved:   {}\n", found.display()));
        }
        out.push_str(&format!(
            "entry point:  {}{}\n",
            self.plan.entry_point.display(),
            missing_marker(self.entry_point_exists)
        ));
        out.push_str(&format!("pause:        {}\n", self.pause));
        out
    }
}

fn missing_marker(exists: bool) -> &'static str {
    if exists {
        ""
    } else {
        " (missing)"
    }
}

pub fn cmd_print_plan(settings: &LaunchSettings, json: bool) -> Result<()> {
    let plan = settings.plan();
    let report = PlanReport::new(&plan, settings.pause);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Serialize launch plan")?
        );
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
