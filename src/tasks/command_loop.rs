//! Command loop background task

use std::sync::Arc;
use tokio::{io::AsyncWrite, sync::mpsc};
use tracing::{debug, error, info};

use crate::{
    console::{handle_command, render, Command, RenderMode, Reply, HELP},
    engine::TimerEngine,
    scheduler::Scheduler,
    utils::{write_line, SharedOutput},
};

/// Apply console lines to the engine until `quit` or end of input
pub async fn command_loop_task<S, W>(
    engine: Arc<TimerEngine<S>>,
    mut lines: mpsc::UnboundedReceiver<String>,
    mode: RenderMode,
    out: SharedOutput<W>,
) -> std::io::Result<()>
where
    S: Scheduler,
    W: AsyncWrite + Unpin,
{
    info!("Starting command loop");
    write_line(&out, HELP).await?;

    while let Some(line) = lines.recv().await {
        debug!("Console input: {:?}", line);

        let reply = match line.parse::<Command>() {
            Ok(command) => handle_command(&engine, command),
            Err(e) => Reply::Message(e.to_string()),
        };

        match reply {
            Reply::Updated => {}
            Reply::Status(snapshot) => match render(&snapshot, mode) {
                Ok(rendered) => write_line(&out, &rendered).await?,
                Err(e) => error!("Failed to render status: {}", e),
            },
            Reply::Message(message) => write_line(&out, &message).await?,
            Reply::Quit => {
                info!("Quit requested");
                return Ok(());
            }
        }
    }

    info!("Console input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scheduler::ManualScheduler, utils::shared_output};

    #[tokio::test]
    async fn test_commands_drive_engine() {
        let engine = Arc::new(TimerEngine::new(ManualScheduler::new()));
        let (tx, rx) = mpsc::unbounded_channel();
        for line in ["+", "+", "-", "s", "?", "dance", "q", "r"] {
            tx.send(line.to_string()).unwrap();
        }

        let out = shared_output(Vec::new());
        command_loop_task(Arc::clone(&engine), rx, RenderMode::Text, Arc::clone(&out))
            .await
            .unwrap();
        let output = String::from_utf8(out.lock().await.clone()).unwrap();

        // Stopped at quit, so the trailing reset never ran
        let state = engine.state();
        assert!(state.is_running);
        assert_eq!(state.limit_minutes, 26);

        assert!(output.starts_with("Commands:"));
        assert!(output.contains("[Running] 26:00  limit 26 min  s=Pause\n"));
        assert!(output.contains("unknown command 'dance'"));
    }

    #[tokio::test]
    async fn test_ends_when_input_closes() {
        let engine = Arc::new(TimerEngine::new(ManualScheduler::new()));
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send("start".to_string()).unwrap();
        drop(tx);

        let out = shared_output(Vec::new());
        command_loop_task(Arc::clone(&engine), rx, RenderMode::Json, out)
            .await
            .unwrap();
        assert!(engine.is_running());
    }
}
