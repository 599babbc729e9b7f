//! Line-oriented terminal I/O for the interactive menus.
//!
//! Generic over any `BufRead` input and `Write` output so menus can be
//! driven from scripted input in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// Returns `None` at end of input. Surrounding whitespace is trimmed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print text verbatim (no trailing newline added).
    pub fn show(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{text}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
