//! Blocking line-based console I/O
//!
//! Wraps a `BufRead` source and a `Write` sink so the interactive loop can
//! run against stdin/stdout in the binary and against in-memory buffers in
//! tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of player-facing text.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to console")
    }

    /// Write text as-is, without a trailing newline.
    pub fn text(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("failed to write to console")?;
        self.output.flush().context("failed to flush console")
    }

    /// Print a prompt and read one line, trimmed. End of input is an error:
    /// the game cannot continue without a player.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.text(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            bail!("console input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the reply parses as an integer. Non-numeric input is
    /// re-prompted and never reaches the caller.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let reply = self.prompt(prompt)?;
            match reply.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.line("Please enter a whole number.")?,
            }
        }
    }

    /// Consume the console and return everything written to it. Test helper.
    pub fn into_output(self) -> W {
        self.output
    }
}
