//! CLI command handlers for `schoolrec`.
//!
//! Each command is implemented in its own submodule. The interactive sessions
//! share [`Console`] so they can be driven from any reader and writer in tests.

pub mod attendance;
pub mod config;
pub mod enrollment;
pub mod grades;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompt over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write `prompt` without a newline and read one trimmed line
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt and parse the reply
    ///
    /// Returns `None` at end of input and `Some(Err(_))` when the reply does
    /// not parse.
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
    ) -> io::Result<Option<Result<T, T::Err>>> {
        Ok(self.prompt(prompt)?.map(|line| line.parse()))
    }

    /// Consume the console and hand back the output stream
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
