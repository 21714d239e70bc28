//! Line-oriented console: prompts, validated numeric input, status lines.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use stockdesk_core::DomainError;

/// Thin wrapper over a line-oriented input and an output sink.
///
/// Generic over both ends so tests can drive whole flows with scripted input
/// and capture what the operator would see.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Green confirmation line.
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        self.line(&format!("✓ {msg}").green().to_string())
    }

    /// Map a recoverable domain failure to an operator-visible error line.
    pub fn error(&mut self, err: &DomainError) -> io::Result<()> {
        self.line(&format!("{} {err}", "Error:".red().bold()))
    }

    /// Prompt and read one trimmed line. Fails once input is exhausted, so
    /// re-prompt loops terminate when stdin closes.
    pub fn prompt(&mut self, msg: &str) -> io::Result<String> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }

    /// Prompt for an integer, re-prompting until one parses.
    pub fn read_i64(&mut self, msg: &str) -> io::Result<i64> {
        loop {
            match self.prompt(msg)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.line("Enter a valid integer")?,
            }
        }
    }

    /// Prompt for a decimal, re-prompting until one parses.
    pub fn read_f64(&mut self, msg: &str) -> io::Result<f64> {
        loop {
            match self.prompt(msg)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.line("Enter a valid number")?,
            }
        }
    }

    /// `(y/n)` confirmation; anything but `y`/`Y` counts as no.
    pub fn confirm(&mut self, msg: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{msg} (y/n): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Consume the console and hand back its input and output ends.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Hold the screen until the operator presses Enter.
    pub fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(())
    }
}
