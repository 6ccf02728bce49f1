pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod select;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
