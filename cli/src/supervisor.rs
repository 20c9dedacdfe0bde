//! Collects the errors reported by the workers
//!
use std::{thread::JoinHandle, time::Duration};

use errq_core::{BoundedErrorQueue, ErrorInformation};
use tracing::{debug, warn};

use crate::workers::WorkerReport;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// number of failed jobs
    pub reported: u64,
    pub collected: u64,
    pub dropped: u64,
}

/// Polls the queue until every worker exited, then drains whatever is left.
///
/// Each collected error is handed to `sink`. Sink errors abort supervision, the workers are left
/// running.
pub fn supervise<F>(
    queue: &BoundedErrorQueue<ErrorInformation>,
    workers: Vec<JoinHandle<WorkerReport>>,
    mut sink: F,
) -> anyhow::Result<Summary>
where
    F: FnMut(ErrorInformation) -> anyhow::Result<()>,
{
    let mut summary = Summary::default();
    loop {
        match queue.dequeue() {
            Some(info) => {
                summary.collected += 1;
                sink(info)?;
            }
            None if workers.iter().all(|w| w.is_finished()) => break,
            None => std::thread::sleep(Duration::from_millis(1)),
        }
    }

    // workers may have pushed between the last pop and exiting
    let rest = queue.drain();
    debug!(count = rest.len(), "Draining remaining errors");
    for info in rest {
        summary.collected += 1;
        sink(info)?;
    }

    for worker in workers {
        match worker.join() {
            Ok(report) => {
                summary.reported += report.failed;
                summary.dropped += report.dropped;
            }
            Err(_) => {
                warn!("Worker panicked");
                anyhow::bail!("A worker thread panicked");
            }
        }
    }
    Ok(summary)
}
