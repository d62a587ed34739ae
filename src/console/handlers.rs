//! Console command handlers

use tracing::{info, warn};

use crate::{engine::TimerEngine, scheduler::Scheduler, state::StatusSnapshot};
use super::commands::{Command, HELP};

/// What the console should print after a command
#[derive(Debug, Clone)]
pub enum Reply {
    /// State changed; the render loop prints it
    Updated,
    /// Print this snapshot
    Status(StatusSnapshot),
    /// Print this message
    Message(String),
    /// Leave the command loop
    Quit,
}

/// Apply one console command to the engine
pub fn handle_command<S: Scheduler>(engine: &TimerEngine<S>, command: Command) -> Reply {
    match command {
        Command::StartOrPause => {
            let state = engine.start_or_pause();
            info!("Start/pause requested - timer is now {}", state.status_label());
            Reply::Updated
        }
        Command::Reset => {
            engine.reset();
            info!("Reset requested");
            Reply::Updated
        }
        Command::IncreaseLimit => match engine.increase_limit() {
            Ok(_) => Reply::Updated,
            Err(e) => {
                warn!("Failed to increase limit: {}", e);
                Reply::Message(e.to_string())
            }
        },
        Command::DecreaseLimit => match engine.decrease_limit() {
            Ok(_) => Reply::Updated,
            Err(e) => {
                warn!("Failed to decrease limit: {}", e);
                Reply::Message(e.to_string())
            }
        },
        Command::Status => Reply::Status(engine.status()),
        Command::Help => Reply::Message(HELP.to_string()),
        Command::Quit => Reply::Quit,
    }
}
