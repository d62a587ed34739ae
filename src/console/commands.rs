//! Console command parsing

use std::str::FromStr;

use crate::error::CommandError;

/// One user action read from the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartOrPause,
    Reset,
    IncreaseLimit,
    DecreaseLimit,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a line of input. An empty line toggles start/pause.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" | "s" | "start" | "pause" | "space" => Ok(Command::StartOrPause),
            "r" | "reset" => Ok(Command::Reset),
            "+" | "up" | "inc" => Ok(Command::IncreaseLimit),
            "-" | "down" | "dec" => Ok(Command::DecreaseLimit),
            "?" | "status" => Ok(Command::Status),
            "h" | "help" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  s, start, pause, <enter>  start or pause the countdown
  r, reset                  stop and restore the 25 minute default
  +, up, inc                raise the limit by one minute
  -, down, dec              lower the limit by one minute
  ?, status                 show the current status
  h, help                   show this help
  q, quit, exit             leave
The limit can only be changed before the countdown has started.";
