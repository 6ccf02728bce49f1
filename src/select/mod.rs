use thiserror::Error;

use crate::error::AppError;

pub mod fzf;

pub use fzf::FzfSelector;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("selection cancelled")]
    Cancelled,
    #[error("{0}")]
    Execution(String),
}

impl From<SelectError> for AppError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::Cancelled => AppError::Cancelled,
            SelectError::Execution(reason) => AppError::SelectorExecutionFailed(reason),
        }
    }
}

/// Picks one line out of an ordered list of candidates.
pub trait Selector {
    fn select(&mut self, candidates: &[String]) -> Result<String, SelectError>;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn select(&mut self, candidates: &[String]) -> Result<String, SelectError> {
        (**self).select(candidates)
    }
}
