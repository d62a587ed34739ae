//! State management module
//!
//! This module contains the timer state and the snapshots derived from it.

pub mod status;
pub mod timer_state;

// Re-export main types
pub use status::StatusSnapshot;
pub use timer_state::{
    TimerPhase, TimerState, DEFAULT_LIMIT_MINUTES, MAX_LIMIT_MINUTES, MIN_LIMIT_MINUTES,
};
