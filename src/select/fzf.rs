use std::ffi::OsString;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::process::{Command, Stdio};

use log::debug;

use super::{SelectError, Selector};

/// fzf exits with 1 when nothing matched and 130 when the user aborted.
const EXIT_NO_MATCH: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

/// Runs an external fuzzy finder, feeding candidates on stdin and reading the choice from stdout.
#[derive(Debug, Clone)]
pub struct FzfSelector {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self::with_command(
            "fzf",
            ["--ansi", "--no-preview", "--header=\nSelect a CatID"],
        )
    }
}

impl FzfSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Selector for FzfSelector {
    fn select(&mut self, candidates: &[String]) -> Result<String, SelectError> {
        let name = self.program_name();
        debug!("launching {name} with {} candidates", candidates.len());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => SelectError::Execution(format!("{name} not found in PATH")),
                _ => SelectError::Execution(format!("failed to launch {name}: {err}")),
            })?;

        if let Some(stdin) = child.stdin.take() {
            if let Err(err) = feed_candidates(stdin, candidates) {
                if err.kind() != ErrorKind::BrokenPipe {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SelectError::Execution(format!(
                        "failed to write candidates to {name}: {err}"
                    )));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|err| SelectError::Execution(format!("failed waiting for {name}: {err}")))?;
        debug!("{name} exited with {}", output.status);

        let stdout = String::from_utf8_lossy(&output.stdout);
        let choice = stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string);

        match (output.status.code(), choice) {
            (Some(0), Some(choice)) => Ok(choice),
            (Some(0), None) | (Some(EXIT_NO_MATCH), _) | (Some(EXIT_INTERRUPTED), _) => {
                Err(SelectError::Cancelled)
            }
            (Some(code), _) => Err(SelectError::Execution(format!(
                "{name} exited with status {code}"
            ))),
            (None, _) => Err(SelectError::Execution(format!(
                "{name} was terminated by a signal"
            ))),
        }
    }
}

// Dropping the writer closes the pipe so the child sees end of input.
fn feed_candidates<W: Write>(stdin: W, candidates: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(stdin);
    for line in candidates {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
