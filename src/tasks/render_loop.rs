//! Render loop background task

use tokio::{io::AsyncWrite, sync::watch};
use tracing::{debug, error, info};

use crate::{
    console::{is_tick_only, render, RenderMode},
    state::StatusSnapshot,
    utils::{write_line, SharedOutput},
};

/// Print the current snapshot, then one line per change until the engine is dropped.
///
/// With `quiet_ticks` set, updates that only advance the countdown are skipped.
pub async fn render_loop_task<W>(
    mut updates: watch::Receiver<StatusSnapshot>,
    mode: RenderMode,
    quiet_ticks: bool,
    out: SharedOutput<W>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    info!("Starting render loop");

    let mut previous = updates.borrow_and_update().clone();
    write_snapshot(&out, &previous, mode).await?;

    while updates.changed().await.is_ok() {
        let current = updates.borrow_and_update().clone();

        if quiet_ticks && is_tick_only(&previous, &current) {
            debug!("Skipping tick-only update");
        } else {
            write_snapshot(&out, &current, mode).await?;
        }
        previous = current;
    }

    debug!("Update channel closed, render loop finished");
    Ok(())
}

async fn write_snapshot<W>(
    out: &SharedOutput<W>,
    snapshot: &StatusSnapshot,
    mode: RenderMode,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match render(snapshot, mode) {
        Ok(line) => write_line(out, &line).await,
        Err(e) => {
            error!("Failed to render status: {}", e);
            Ok(())
        }
    }
}
