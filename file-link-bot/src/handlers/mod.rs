//! Handlers in chain order: commands first, then the file link handler.

mod commands;
mod file_link;

pub use commands::{Command, CommandHandler};
pub use file_link::FileLinkHandler;
