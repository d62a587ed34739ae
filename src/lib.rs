//! Digital Timer - a countdown timer with adjustable limit
//!
//! This library provides the countdown engine, the scheduler capability it
//! ticks through, and a console front end that renders its state.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::TimerEngine;
pub use error::TimerError;
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler};
pub use state::{StatusSnapshot, TimerState};
