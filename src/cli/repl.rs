//! Prompt loop

use super::{CliError, Step, execute_bytes};
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "> ";

/// Reads lines and runs one step on each until end of input.
#[derive(Debug, Clone, Copy)]
pub struct Repl {
    step: Step,
    prompt: bool,
}

impl Repl {
    pub fn new(step: Step) -> Self {
        Repl { step, prompt: true }
    }

    /// Turns the `> ` prompt on or off (off when input is piped).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Runs the loop.
    ///
    /// Lines are handed to the lexer as raw bytes, so input that is not
    /// valid UTF-8 is scanned rather than rejected. Results go to `out` and
    /// parse errors to `err`; a parse error does not stop the loop. I/O and
    /// rendering failures do.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut line = Vec::new();

        loop {
            if self.prompt {
                out.write_all(PROMPT.as_bytes())?;
                out.flush()?;
            }

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }
            let mut text = line.as_slice();
            while let [rest @ .., b'\n' | b'\r'] = text {
                text = rest;
            }

            match execute_bytes(self.step, text) {
                Ok(rendered) => out.write_all(rendered.as_bytes())?,
                Err(CliError::Parse(e)) => writeln!(err, "{}", e)?,
                Err(e) => return Err(e),
            }
            out.flush()?;
        }
    }
}
