//! Status snapshot handed to renderers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TimerPhase, TimerState};

/// Timer state plus its derived display values and last action tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub phase: TimerPhase,
    pub remaining: String,
    pub status: String,
    /// Caption of the start/pause control
    pub action_label: String,
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub limit_minutes: u64,
    pub limit_controls_enabled: bool,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Build a snapshot of the given state
    pub fn new(
        state: &TimerState,
        last_action: Option<String>,
        last_action_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            phase: state.phase(),
            remaining: state.remaining_time_formatted(),
            status: state.status_label().to_string(),
            action_label: state.start_or_pause_label().to_string(),
            elapsed_seconds: state.elapsed_seconds,
            remaining_seconds: state.remaining_seconds(),
            limit_minutes: state.limit_minutes,
            limit_controls_enabled: state.limit_controls_enabled(),
            last_action,
            last_action_time,
            timestamp: Utc::now(),
        }
    }
}

impl From<&TimerState> for StatusSnapshot {
    fn from(state: &TimerState) -> Self {
        Self::new(state, None, None)
    }
}
