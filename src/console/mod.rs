//! Console front end
//!
//! This module turns console input into engine operations and engine
//! snapshots into status lines.

pub mod commands;
pub mod display;
pub mod handlers;

pub use commands::{Command, HELP};
pub use display::{is_tick_only, render, RenderMode};
pub use handlers::{handle_command, Reply};
