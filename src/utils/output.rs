//! Console output shared between tasks

use std::sync::Arc;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};

/// Writer shared by every task that prints to the console
pub type SharedOutput<W> = Arc<Mutex<W>>;

pub fn shared_output<W>(writer: W) -> SharedOutput<W> {
    Arc::new(Mutex::new(writer))
}

/// Write `line` and its newline as one buffer while holding the writer
pub async fn write_line<W>(out: &Mutex<W>, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let mut out = out.lock().await;
    out.write_all(buf.as_bytes()).await?;
    out.flush().await
}
