mod cli;
mod commands;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use pylaunch_core::config::{EnvSource, ObservabilityConfig, DOTENV_FILE};
use pylaunch_core::observability;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = settings::resolve_base_dir(cli.base_dir.as_deref())?;
    // An unreadable .env degrades to process env only; reported once tracing is up.
    let (source, dotenv_err) = match EnvSource::with_dotenv_dir(&base_dir) {
        Ok(source) => (source, None),
        Err(e) => (EnvSource::default(), Some(e)),
    };
    observability::init_tracing(&ObservabilityConfig::from_source(&source), cli.verbose);

    match dotenv_err {
        Some(e) => tracing::warn!("Ignoring {}: {}", DOTENV_FILE, e),
        None => tracing::debug!(keys = source.dotenv_len(), "Loaded {} overlay", DOTENV_FILE),
    }

    if !cli.ignored.is_empty() {
        tracing::debug!(
            count = cli.ignored.len(),
            "Ignoring extra arguments (not forwarded to the entry point)"
        );
    }

    let settings = settings::build_settings(&cli, base_dir, &source);
    tracing::debug!(?settings, "Resolved launch settings");

    if cli.print_plan {
        return commands::plan::cmd_print_plan(&settings, cli.json);
    }

    commands::launch::cmd_launch(&settings);
    Ok(())
}
