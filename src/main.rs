//! Digital Timer - a countdown timer with adjustable limit
//!
//! This is the main entry point for the digital-timer console.

use std::sync::Arc;
use tracing::{error, info};

use digital_timer::{
    config::Config,
    engine::TimerEngine,
    scheduler::TokioScheduler,
    tasks::{command_loop_task, render_loop_task},
    utils::{register_shutdown_signals, shared_output, shutdown_signal, spawn_stdin_reader},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not interleave with status lines
    tracing_subscriber::fmt()
        .with_env_filter(format!("digital_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting digital-timer v1.0.0");
    info!(
        "Configuration: json={}, quiet_ticks={}",
        config.json, config.quiet_ticks
    );

    let signals = register_shutdown_signals()?;
    let lines = spawn_stdin_reader()?;

    let engine = Arc::new(TimerEngine::new(TokioScheduler::new()?));

    // Both loops print through one writer so their lines never interleave
    let stdout = shared_output(tokio::io::stdout());

    // The render loop ends on its own once the engine is dropped
    let render = tokio::spawn(render_loop_task(
        engine.subscribe(),
        config.render_mode(),
        config.quiet_ticks,
        Arc::clone(&stdout),
    ));

    let commands = command_loop_task(
        Arc::clone(&engine),
        lines,
        config.render_mode(),
        stdout,
    );

    tokio::select! {
        result = commands => {
            if let Err(e) = result {
                error!("Command loop error: {}", e);
            }
        }
        _ = shutdown_signal(signals) => {
            info!("Shutdown signal received");
        }
    }

    // Dropping the last engine handle cancels the tick task
    drop(engine);

    match render.await {
        Ok(Err(e)) => error!("Render loop error: {}", e),
        Err(e) => error!("Render loop task failed: {}", e),
        Ok(Ok(())) => {}
    }

    info!("Timer shutdown complete");
    Ok(())
}
