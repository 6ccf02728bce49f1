use std::io::{self, ErrorKind, Write};

use crossterm::tty::IsTty;

use crate::error::Result;

/// Whether stdout is attached to a terminal. When it is not, the catalog is listed instead.
pub fn stdout_is_interactive() -> bool {
    io::stdout().is_tty()
}

/// Write one line per entry. A reader that hangs up early is not an error.
pub fn write_listing<W: Write>(mut out: W, lines: &[String]) -> Result<()> {
    let written = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|_| out.flush());

    match written {
        Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err.into()),
        _ => Ok(()),
    }
}
