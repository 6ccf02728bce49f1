pub mod console;
pub mod prompt;
pub mod terminal;

pub use console::{Console, StdConsole};
pub use prompt::{FieldPrompt, PromptState, Rejection};
pub use terminal::{stdout_is_interactive, write_listing};
