//! Countdown engine module

pub mod timer_engine;

pub use timer_engine::TimerEngine;
