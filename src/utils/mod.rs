//! Utility functions module
//!
//! This module contains process-level helpers used by the binary.

pub mod input;
pub mod output;
pub mod signals;

// Re-export main functions
pub use input::spawn_stdin_reader;
pub use output::{shared_output, write_line, SharedOutput};
pub use signals::{register_shutdown_signals, shutdown_signal};
