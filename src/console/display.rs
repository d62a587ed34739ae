//! Rendering of status snapshots for the console

use crate::state::StatusSnapshot;

/// Output format of status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// `[Running] 24:59  limit 25 min  s=Pause`
    Text,
    /// One JSON object per line
    Json,
}

/// Render a snapshot as a single line (without the newline)
pub fn render(snapshot: &StatusSnapshot, mode: RenderMode) -> serde_json::Result<String> {
    match mode {
        RenderMode::Text => {
            let mut line = format!(
                "[{}] {} limit {} min  s={}",
                snapshot.status, snapshot.remaining, snapshot.limit_minutes, snapshot.action_label
            );
            if !snapshot.limit_controls_enabled {
                line.push_str("  (+/- locked)");
            }
            Ok(line)
        }
        RenderMode::Json => serde_json::to_string(snapshot),
    }
}

/// True when `next` differs from `previous` only by one second of progress
pub fn is_tick_only(previous: &StatusSnapshot, next: &StatusSnapshot) -> bool {
    previous.phase == next.phase
        && previous.limit_minutes == next.limit_minutes
        && previous.last_action == next.last_action
        && next.elapsed_seconds == previous.elapsed_seconds + 1
}
