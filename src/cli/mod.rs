//! Command-line interface module
//!
//! Argument parsing, the interactive REPL and the one-shot commands.

pub mod args;
pub mod ask;
pub mod chat;
pub mod init;
pub mod input;
mod render;
pub mod subjects;
mod texts;

pub use args::*;
pub use ask::handle_ask_command;
pub use chat::handle_chat_command;
pub use init::handle_init_command;
pub use subjects::handle_subjects_command;
