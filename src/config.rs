//! Configuration and CLI argument handling

use clap::Parser;

use crate::console::RenderMode;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "digital-timer")]
#[command(about = "A console countdown timer with start, pause, reset and adjustable limit")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Print status lines as JSON objects
    #[arg(short, long)]
    pub json: bool,

    /// Only print status lines on transitions, not on every tick
    #[arg(short, long)]
    pub quiet_ticks: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.json { RenderMode::Json } else { RenderMode::Text }
    }
}
