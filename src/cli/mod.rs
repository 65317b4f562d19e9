//! Command-line surface of the `symptom-interview` binary.
//!
//! Parsing and rendering live here so they can be tested without a
//! terminal; `main.rs` only does the I/O.

mod commands;
mod help;
mod input;
mod render;

pub use crate::error::CommandParseError;
pub use commands::{Command, DEFAULT_HISTORY_DISPLAY, UNSPECIFIED};
pub use help::help_text;
pub use input::parse_answer_line;
pub use render::{format_diagnosis, format_history_line, format_question, format_record};
