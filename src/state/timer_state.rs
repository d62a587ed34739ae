//! Timer state structure and its derived display values

use serde::{Deserialize, Serialize};

/// Limit applied when the timer is created or reset
pub const DEFAULT_LIMIT_MINUTES: u64 = 25;

/// Smallest limit the decrease control can reach
pub const MIN_LIMIT_MINUTES: u64 = 1;

/// Largest limit whose value in seconds still fits in a `u64`
pub const MAX_LIMIT_MINUTES: u64 = u64::MAX / 60;

/// Whether the countdown is currently advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Paused,
    Running,
}

impl TimerPhase {
    /// Label shown under the readout
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Paused => "Paused",
            TimerPhase::Running => "Running",
        }
    }
}

/// Countdown state: run flag, whole elapsed seconds and configured limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_running: bool,
    pub elapsed_seconds: u64,
    pub limit_minutes: u64,
}

impl TimerState {
    /// Create a paused timer with nothing elapsed and the default limit
    pub fn new() -> Self {
        Self {
            is_running: false,
            elapsed_seconds: 0,
            limit_minutes: DEFAULT_LIMIT_MINUTES,
        }
    }

    pub fn limit_seconds(&self) -> u64 {
        self.limit_minutes * 60
    }

    /// Seconds left before the countdown reaches zero
    pub fn remaining_seconds(&self) -> u64 {
        self.limit_seconds().saturating_sub(self.elapsed_seconds)
    }

    /// True once the elapsed time has reached the limit
    pub fn is_completed(&self) -> bool {
        self.elapsed_seconds == self.limit_seconds()
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_running {
            TimerPhase::Running
        } else {
            TimerPhase::Paused
        }
    }

    /// Remaining time as `MM:SS ` (the trailing space is part of the readout)
    pub fn remaining_time_formatted(&self) -> String {
        let remaining = self.remaining_seconds();
        let minutes = remaining / 60;
        let seconds = remaining % 60;
        format!("{:02}:{:02} ", minutes, seconds)
    }

    pub fn status_label(&self) -> &'static str {
        self.phase().label()
    }

    /// Caption for the start/pause control
    pub fn start_or_pause_label(&self) -> &'static str {
        if self.is_running { "Pause" } else { "Start" }
    }

    /// The limit can only be adjusted before a run has accumulated time
    pub fn limit_controls_enabled(&self) -> bool {
        self.elapsed_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
