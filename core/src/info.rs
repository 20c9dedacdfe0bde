use std::{error::Error, fmt, time::SystemTime};

/// Identity of the worker thread that reported a failure
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker {}", self.0)
    }
}

/// A single failure reported by a worker.
///
/// Queues pass these through untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorInformation {
    pub worker: WorkerId,
    pub message: String,
    pub reported_at: SystemTime,
}

impl ErrorInformation {
    pub fn new(worker: WorkerId, message: impl Into<String>) -> Self {
        Self {
            worker,
            message: message.into(),
            reported_at: SystemTime::now(),
        }
    }

    /// Flattens `error` and its chain of sources into the message
    pub fn from_error(worker: WorkerId, error: &dyn Error) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        Self::new(worker, message)
    }
}

impl fmt::Display for ErrorInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.worker, self.message)
    }
}
