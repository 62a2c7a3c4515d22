pub mod command;
pub mod state;

pub use command::{parse_leg, Command};
pub use state::{App, Outcome};

use anyhow::Result;
use std::io::{BufRead, Write};

impl App {
    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Flock errors are reported back to the user and the loop carries on;
    /// only I/O failures end it early.
    pub fn run_menu<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", command::HELP)?;
        let mut lines = input.lines();

        while self.running {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>().and_then(|cmd| self.execute(cmd)) {
                Ok(Outcome::Report(text)) => writeln!(output, "{text}")?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }

        tracing::info!(
            total_distance = self.flock.total_distance(),
            "Menu closed"
        );
        Ok(())
    }
}
