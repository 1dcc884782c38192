//! Error types used by the execution engine and the job source contract.
//!
//! This module defines two main error enums:
//!
//! - [`JobError`] — errors raised by a single job execution.
//! - [`QueueError`] — errors raised by a job source ([`JobQueue`](crate::JobQueue)).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! ## Propagation policy
//! The worker never swallows a failure: every non-success path invokes the
//! `on_failure` hook and then returns the error to the `execute` caller. The
//! caller decides how to update the job source (mark failed, re-enqueue, etc.).
//! The worker's internal retries are invisible to the source — `execute` either
//! fully succeeds or fully fails after all internal attempts are exhausted.

use std::time::Duration;
use thiserror::Error;

use crate::jobs::JobId;

/// # Errors produced by executing a single job.
///
/// `Decode` is fatal for the attempt (never retried). `Timeout` is only
/// produced in timeout-only mode. `RetriesExhausted` is the terminal error of
/// retry mode and embeds the last underlying failure. `Fail` is the raw
/// handler failure, surfaced unmodified in plain mode and per-attempt in
/// retry mode.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum JobError {
    /// Payload could not be deserialized into the handler's input type.
    #[error("payload decode failed: {error}")]
    Decode {
        /// The underlying deserialization error message.
        error: String,
    },

    /// Execution exceeded its timeout (timeout-only mode).
    #[error("timed out after {timeout:?}")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout: Duration,
    },

    /// All retry attempts failed.
    #[error("failed after {retries} retries: {error}")]
    RetriesExhausted {
        /// Configured retry count (total attempts were `retries + 1`).
        retries: u32,
        /// The last underlying failure message.
        error: String,
    },

    /// Handler returned a failure.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl JobError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use jobrun::JobError;
    /// use std::time::Duration;
    ///
    /// let err = JobError::Timeout { timeout: Duration::from_secs(1) };
    /// assert_eq!(err.as_label(), "job_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            JobError::Decode { .. } => "job_decode_failed",
            JobError::Timeout { .. } => "job_timeout",
            JobError::RetriesExhausted { .. } => "job_retries_exhausted",
            JobError::Fail { .. } => "job_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            JobError::Decode { error } => format!("decode: {error}"),
            JobError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            JobError::RetriesExhausted { retries, error } => {
                format!("retries exhausted ({retries}): {error}")
            }
            JobError::Fail { error } => format!("error: {error}"),
        }
    }

    /// True for errors that terminate the attempt before the handler ran.
    pub fn is_decode(&self) -> bool {
        matches!(self, JobError::Decode { .. })
    }
}

/// # Errors produced by a job source.
///
/// Raised by [`JobQueue`](crate::JobQueue) implementations; the engine itself
/// never constructs these.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum QueueError {
    /// No job is available to dequeue.
    #[error("no jobs queued")]
    Empty,

    /// No job with the given id exists in the source.
    #[error("job {id} not found")]
    NotFound {
        /// Identifier that failed to resolve.
        id: JobId,
    },

    /// Backing storage failed.
    #[error("storage error: {error}")]
    Storage {
        /// The underlying storage error message.
        error: String,
    },
}

impl QueueError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            QueueError::Empty => "queue_empty",
            QueueError::NotFound { .. } => "queue_not_found",
            QueueError::Storage { .. } => "queue_storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let err = JobError::Decode {
            error: "bad json".into(),
        };
        assert_eq!(err.as_label(), "job_decode_failed");

        let err = JobError::RetriesExhausted {
            retries: 2,
            error: "boom".into(),
        };
        assert_eq!(err.as_label(), "job_retries_exhausted");
        assert!(err.to_string().contains("2 retries"));
        assert!(err.to_string().contains("boom"));

        let err = JobError::Fail {
            error: "boom".into(),
        };
        assert_eq!(err.as_label(), "job_failed");
    }

    #[test]
    fn messages_carry_detail() {
        let err = JobError::Timeout {
            timeout: Duration::from_millis(50),
        };
        assert!(err.as_message().contains("50ms"));
        assert!(!err.is_decode());
    }

    #[test]
    fn queue_labels() {
        assert_eq!(QueueError::Empty.as_label(), "queue_empty");
        let err = QueueError::NotFound {
            id: JobId::generate(),
        };
        assert_eq!(err.as_label(), "queue_not_found");

        let err = QueueError::Storage {
            error: "disk full".into(),
        };
        assert_eq!(err.as_label(), "queue_storage");
        assert!(err.to_string().contains("disk full"));
    }
}
