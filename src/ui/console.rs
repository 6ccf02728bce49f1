use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use crate::error::Result;

/// Line-oriented terminal I/O: prompts go to `output`, complaints to `errors`.
pub struct Console<R, O, E> {
    input: R,
    output: O,
    errors: E,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> Console<R, O, E> {
    pub fn new(input: R, output: O, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Write `text` without a newline and flush so it shows before the read blocks.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn complain(&mut self, line: &str) -> Result<()> {
        writeln!(self.errors, "{line}")?;
        self.errors.flush()?;
        Ok(())
    }

    /// Read one line, without its terminator. `None` means the input is closed.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(|ch: char| ch == '\r' || ch == '\n').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn into_parts(self) -> (R, O, E) {
        (self.input, self.output, self.errors)
    }
}
