//! Menu command layer
//!
//! Parses numbered menu input into commands and handles each command
//! against the session and the store.

mod handlers;
mod parser;

pub use handlers::{display_options, handle_command};
pub use parser::{
    HomeCommand, SessionCommand, SessionStatus, parse_home_command, parse_session_command,
};
