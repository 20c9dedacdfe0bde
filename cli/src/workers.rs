//! Simulated thread pool workers reporting their failures to a shared error queue
//!
use std::{
    io,
    sync::Arc,
    thread::{self, JoinHandle},
};

use errq_core::{ErrorInformation, ErrorQueue, WorkerId};
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
#[error("job {job} failed")]
pub struct JobError {
    pub job: u64,
    #[source]
    pub source: io::Error,
}

/// What a single worker did during its lifetime
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub failed: u64,
    pub dropped: u64,
}

pub type ErrorQueueHandle = Arc<dyn ErrorQueue<ErrorInformation>>;

fn run_job(job: u64, fail_every: u64) -> Result<(), JobError> {
    if (job + 1) % fail_every == 0 {
        return Err(JobError {
            job,
            source: io::Error::new(io::ErrorKind::Other, "simulated failure"),
        });
    }
    Ok(())
}

/// Runs `jobs` jobs, pushing every failure into the queue.
///
/// Reports that don't fit are logged and dropped.
pub fn run_worker(
    id: WorkerId,
    queue: &dyn ErrorQueue<ErrorInformation>,
    jobs: u64,
    fail_every: u64,
) -> WorkerReport {
    let mut report = WorkerReport::default();
    for job in 0..jobs {
        let result = run_job(job, fail_every);
        if result.is_err() {
            report.failed += 1;
        }
        // successful jobs hand the queue `None`
        let info = result.err().map(|err| ErrorInformation::from_error(id, &err));
        if let Err(err) = queue.enqueue(info) {
            debug!(worker = id.0, job, %err, "Dropping error report");
            report.dropped += 1;
        }
    }
    trace!(worker = id.0, ?report, "Worker finished");
    report
}

pub fn spawn_workers(
    queue: &ErrorQueueHandle,
    workers: u64,
    jobs: u64,
    fail_every: u64,
) -> Vec<JoinHandle<WorkerReport>> {
    (0..workers)
        .map(|i| {
            let queue = Arc::clone(queue);
            thread::spawn(move || run_worker(WorkerId(i), &*queue, jobs, fail_every))
        })
        .collect()
}
