mod config;
mod supervisor;
mod workers;

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Context;
use errq_core::{BoundedErrorQueue, ErrorInformation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, workers::ErrorQueueHandle};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = config::app().get_matches();
    let config = Config::from_matches(&matches).with_context(|| "Failed to read configuration")?;
    info!(?config, "Starting workers");

    let queue: Arc<BoundedErrorQueue<ErrorInformation>> =
        Arc::new(BoundedErrorQueue::new(config.capacity));
    let handle: ErrorQueueHandle = queue.clone();
    let workers = workers::spawn_workers(&handle, config.workers, config.jobs, config.fail_every);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let json = config.json;
    let summary = supervisor::supervise(&queue, workers, |err| {
        if json {
            let line = serde_json::to_string(&err).with_context(|| "Failed to serialize error")?;
            writeln!(out, "{}", line).with_context(|| "Failed to write error")?;
        } else {
            info!(worker = err.worker.0, "{}", err.message);
        }
        Ok(())
    })?;
    out.flush().with_context(|| "Failed to flush output")?;

    if summary.dropped > 0 {
        warn!(
            dropped = summary.dropped,
            capacity = config.capacity,
            "Some error reports did not fit into the queue"
        );
    }
    info!(
        reported = summary.reported,
        collected = summary.collected,
        dropped = summary.dropped,
        "Done"
    );
    Ok(())
}
