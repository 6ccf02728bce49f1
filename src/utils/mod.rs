pub mod text;

pub use text::{hyphenate_whitespace, leading_token};
