use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to load category catalog from {source_name}: {reason}")]
    CatalogLoadFailed { source_name: String, reason: String },
    #[error("unknown CatID: {0}")]
    UnknownCategory(String),
    #[error("category selector failed: {0}")]
    SelectorExecutionFailed(String),
    #[error("no CatID selected")]
    Cancelled,
    #[error("{0} is required")]
    RequiredFieldMissing(String),
    #[error("{0} cannot contain \"_\", because it is the filename field delimiter")]
    DelimiterConflict(String),
    #[error("input closed while waiting for {0}")]
    InputExhausted(String),
    #[error("{0} is a directory")]
    NotAFile(String),
    #[error("no file name extension found")]
    NoExtension,
    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn catalog_load<S: Into<String>, R: ToString>(source_name: S, reason: R) -> Self {
        AppError::CatalogLoadFailed {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
