use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{AppError, Context, Result};
use crate::ui::Console;

/// The file being renamed, checked before any prompting happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    base_name: String,
    extension: String,
}

impl SourceFile {
    /// Stat `path` (relative to `working_dir`) and capture its base name and extension.
    pub fn inspect(working_dir: &Path, path: &Path) -> Result<Self> {
        let full_path = working_dir.join(path);
        let metadata = fs::metadata(&full_path)
            .with_context(|| format!("failed to stat {}", path.display()))?;

        let base_name = full_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if metadata.is_dir() {
            return Err(AppError::NotAFile(base_name));
        }

        // Everything from the last dot on, so ".wav" and "take." both keep a suffix.
        let extension = base_name
            .rfind('.')
            .map(|index| base_name[index..].to_string())
            .ok_or(AppError::NoExtension)?;

        Ok(Self {
            base_name,
            extension,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extension including its leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Declined,
}

/// Renames a source file within `working_dir`, asking first unless forced.
#[derive(Debug, Clone)]
pub struct Renamer {
    working_dir: PathBuf,
    force: bool,
}

impl Renamer {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn confirm_and_rename<R, O, E>(
        &self,
        console: &mut Console<R, O, E>,
        source: &SourceFile,
        new_name: &str,
    ) -> Result<RenameOutcome>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        if !self.force && !confirm(console, source.base_name(), new_name)? {
            info!("rename of {} declined", source.base_name());
            return Ok(RenameOutcome::Declined);
        }
        self.rename(source.base_name(), new_name)
    }

    fn rename(&self, old_name: &str, new_name: &str) -> Result<RenameOutcome> {
        let from = self.working_dir.join(old_name);
        let to = self.working_dir.join(new_name);
        fs::rename(&from, &to).map_err(|source| AppError::RenameFailed {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        info!("renamed {} to {}", from.display(), to.display());
        Ok(RenameOutcome::Renamed { from, to })
    }
}

// Only an explicit yes counts; anything else, including closed input, is a no.
fn confirm<R, O, E>(console: &mut Console<R, O, E>, old_name: &str, new_name: &str) -> Result<bool>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    console.prompt(&format!("Rename {old_name:?} to {new_name:?}? (y/n) "))?;
    let answer = console.read_line()?.unwrap_or_default();
    let answer = answer
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
