//! Background tasks module
//!
//! This module contains the tasks that connect the engine to the console.

pub mod command_loop;
pub mod render_loop;

// Re-export main functions
pub use command_loop::command_loop_task;
pub use render_loop::render_loop_task;
