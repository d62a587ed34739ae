//! Error types for timer operations

use thiserror::Error;

/// Operations the engine refuses to apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("timer limit is locked while {elapsed_seconds}s have elapsed; reset first")]
    LimitLocked { elapsed_seconds: u64 },
}

/// Console input that does not map to a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    Unknown(String),
}
