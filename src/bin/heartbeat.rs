use anyhow::{Context, Result};
use heartbeat::{logging, Heartbeat};
use tokio::runtime;
use tokio_util::sync::CancellationToken;

fn main() -> Result<()> {
    let sink = logging::console();

    let rt = runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build the tokio runtime")?;

    // Nothing ever cancels this token: the loop runs until the process is killed.
    rt.block_on(Heartbeat::new(sink).run(CancellationToken::new()));
    Ok(())
}
