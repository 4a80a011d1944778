//! Wait for the user before the console closes.

use std::io::{self, BufRead, IsTerminal, Write};

use pylaunch_core::config::PauseMode;

/// Prompt shown after the child exits.
pub const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// Blocks until the user acknowledges.
pub trait Acknowledge {
    fn acknowledge(&mut self) -> io::Result<()>;
}

/// Writes the prompt to `output` and reads one line from `input`.
/// End of input counts as acknowledgment.
pub struct LineAcknowledger<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineAcknowledger<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Acknowledge for LineAcknowledger<R, W> {
    fn acknowledge(&mut self) -> io::Result<()> {
        write!(self.output, "{}", PAUSE_PROMPT)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF: keep the shell prompt on its own line
            writeln!(self.output)?;
        }
        Ok(())
    }
}

/// Prompt on stderr, read from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinAcknowledger;

impl Acknowledge for StdinAcknowledger {
    fn acknowledge(&mut self) -> io::Result<()> {
        LineAcknowledger::new(io::stdin().lock(), io::stderr()).acknowledge()
    }
}

/// Whether `mode` asks for a pause, given whether stdin is interactive.
pub fn should_pause(mode: PauseMode, stdin_is_terminal: bool) -> bool {
    match mode {
        PauseMode::Always => true,
        PauseMode::Never => false,
        PauseMode::Auto => stdin_is_terminal,
    }
}

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
