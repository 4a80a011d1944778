use clap::Parser;
use std::path::PathBuf;

use pylaunch_core::config::PauseMode;

/// pylaunch - run main.py with the local venv interpreter (or the system one), then wait
#[derive(Parser, Debug)]
#[command(name = "pylaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the environment and entry point (default: directory of this executable)
    #[arg(long, value_name = "DIR", env = "PYLAUNCH_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Environment directory name under the base directory (default: from env or "venv")
    #[arg(long, value_name = "NAME")]
    pub env_dir: Option<String>,

    /// Entry-point file relative to the base directory (default: from env or "main.py")
    #[arg(long, value_name = "FILE")]
    pub entry_point: Option<String>,

    /// Interpreter searched on PATH when there is no environment directory (default: from env or "python")
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// When to wait for Enter after the program exits: always, never, auto (default: from env or always)
    #[arg(long, value_name = "MODE", conflicts_with = "no_pause")]
    pub pause: Option<PauseMode>,

    /// Do not wait for Enter after the program exits
    #[arg(long, default_value = "false")]
    pub no_pause: bool,

    /// Print the resolved interpreter and entry point, then exit without running
    #[arg(long, default_value = "false")]
    pub print_plan: bool,

    /// Print the plan as JSON (with --print-plan)
    #[arg(long, default_value = "false", requires = "print_plan")]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Anything else on the command line. Accepted for compatibility, never forwarded.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}
