//! Console input reader

use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forward stdin lines into a channel from a dedicated thread.
///
/// Blocking reads stay off the runtime so shutdown never waits on the terminal.
/// The channel closes at end of input.
pub fn spawn_stdin_reader() -> std::io::Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            debug!("Command loop gone, stopping stdin reader");
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read console input: {}", e);
                        break;
                    }
                }
            }
        })?;

    Ok(rx)
}
