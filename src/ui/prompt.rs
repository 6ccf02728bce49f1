use std::io::{BufRead, Write};
use std::mem;

use crate::error::{AppError, Result};
use crate::filename::{Field, Requirement, DELIMITER};
use crate::ui::Console;
use crate::utils::hyphenate_whitespace;

/// Why a typed value was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Required,
    Delimiter,
}

impl Rejection {
    pub fn message(self, field: Field) -> String {
        match self {
            Rejection::Required => format!("Invalid: {field} is required"),
            Rejection::Delimiter => format!(
                "Invalid: value cannot contain \"{DELIMITER}\", because it is the filename field delimiter"
            ),
        }
    }

    fn into_error(self, field: Field) -> AppError {
        match self {
            Rejection::Required => AppError::RequiredFieldMissing(field.label().to_string()),
            Rejection::Delimiter => AppError::DelimiterConflict(field.label().to_string()),
        }
    }
}

/// Trim, check and normalize one typed line.
pub fn validate(raw: &str, requirement: Requirement) -> std::result::Result<String, Rejection> {
    let trimmed = raw.trim();
    if requirement == Requirement::Required && trimmed.is_empty() {
        return Err(Rejection::Required);
    }
    if trimmed.contains(DELIMITER) {
        return Err(Rejection::Delimiter);
    }
    Ok(hyphenate_whitespace(trimmed))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    Prompting,
    Validating(String),
    Accepted(String),
    Failed,
}

/// Prompt-and-validate loop for one field.
///
/// Each [`step`](FieldPrompt::step) performs a single transition. Rejected input
/// sends the machine back to `Prompting` unless re-prompting is disabled, in which
/// case the rejection surfaces as an error. A closed input moves it to `Failed`.
#[derive(Debug)]
pub struct FieldPrompt {
    field: Field,
    reprompt: bool,
    state: PromptState,
    lines_read: usize,
}

impl FieldPrompt {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            reprompt: true,
            state: PromptState::Prompting,
            lines_read: 0,
        }
    }

    pub fn reprompt(mut self, enabled: bool) -> Self {
        self.reprompt = enabled;
        self
    }

    pub fn state(&self) -> &PromptState {
        &self.state
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn step<R, O, E>(&mut self, console: &mut Console<R, O, E>) -> Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        self.state = match mem::replace(&mut self.state, PromptState::Prompting) {
            PromptState::Prompting => {
                console.prompt(&format!("{}: ", self.field))?;
                match console.read_line()? {
                    Some(line) => {
                        self.lines_read += 1;
                        PromptState::Validating(line)
                    }
                    None => PromptState::Failed,
                }
            }
            PromptState::Validating(line) => {
                match validate(&line, self.field.requirement()) {
                    Ok(value) => PromptState::Accepted(value),
                    Err(rejection) if self.reprompt => {
                        console.complain(&rejection.message(self.field))?;
                        PromptState::Prompting
                    }
                    Err(rejection) => {
                        self.state = PromptState::Failed;
                        return Err(rejection.into_error(self.field));
                    }
                }
            }
            done => done,
        };
        Ok(())
    }

    /// Step until the value is accepted or the input runs out.
    pub fn run<R, O, E>(&mut self, console: &mut Console<R, O, E>) -> Result<String>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        loop {
            match &mut self.state {
                PromptState::Accepted(value) => return Ok(mem::take(value)),
                PromptState::Failed => {
                    return Err(AppError::InputExhausted(self.field.label().to_string()))
                }
                _ => self.step(console)?,
            }
        }
    }
}
