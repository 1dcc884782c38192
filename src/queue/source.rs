//! # Job source contract.
//!
//! [`JobQueue`] is the abstract pull/ack contract the engine's callers use to
//! feed workers and persist status changes. It is deliberately narrow: no
//! wire format, no delivery guarantees — those belong to the implementation.
//!
//! ## Dispatch model
//! The worker does not pull jobs itself and does not queue internally when
//! full. A dispatcher checks [`Worker::available_capacity`](crate::Worker::available_capacity)
//! and pulls that many jobs (typically via [`dequeue_batch`](JobQueue::dequeue_batch)),
//! then updates the source with each execution's outcome.

use async_trait::async_trait;

use crate::error::QueueError;
use crate::jobs::{Job, JobId};

/// Abstract supplier/consumer of jobs.
///
/// All methods take `&self`; implementations are expected to synchronize
/// internally and be shared behind an `Arc`.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Adds a job to the source.
    async fn enqueue(&self, job: Job) -> Result<(), QueueError>;

    /// Returns a point-in-time snapshot of all stored jobs.
    async fn list_all(&self) -> Result<Vec<Job>, QueueError>;

    /// Removes and returns the next job.
    ///
    /// Fails with [`QueueError::Empty`] when none is available.
    async fn dequeue_next(&self) -> Result<Job, QueueError>;

    /// Removes and returns up to `count` jobs claimed for `worker_name`.
    ///
    /// May return fewer than `count` (including none) without error.
    async fn dequeue_batch(&self, worker_name: &str, count: usize) -> Result<Vec<Job>, QueueError>;

    /// Persists status/result changes for a stored job, matched by id.
    ///
    /// Fails with [`QueueError::NotFound`] when the id is unknown.
    async fn update(&self, job: Job) -> Result<(), QueueError>;

    /// Removes a job by id.
    ///
    /// Fails with [`QueueError::NotFound`] when the id is unknown.
    async fn remove(&self, id: &JobId) -> Result<(), QueueError>;

    /// Removes all jobs.
    async fn clear_all(&self) -> Result<(), QueueError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for a source whose backing store is unreachable. Every
    /// method surfaces the store failure as [`QueueError::Storage`].
    struct UnreachableStore;

    impl UnreachableStore {
        fn storage_err() -> QueueError {
            QueueError::Storage {
                error: "connection refused".into(),
            }
        }
    }

    #[async_trait]
    impl JobQueue for UnreachableStore {
        async fn enqueue(&self, _job: Job) -> Result<(), QueueError> {
            Err(Self::storage_err())
        }

        async fn list_all(&self) -> Result<Vec<Job>, QueueError> {
            Err(Self::storage_err())
        }

        async fn dequeue_next(&self) -> Result<Job, QueueError> {
            Err(Self::storage_err())
        }

        async fn dequeue_batch(
            &self,
            _worker_name: &str,
            _count: usize,
        ) -> Result<Vec<Job>, QueueError> {
            Err(Self::storage_err())
        }

        async fn update(&self, _job: Job) -> Result<(), QueueError> {
            Err(Self::storage_err())
        }

        async fn remove(&self, _id: &JobId) -> Result<(), QueueError> {
            Err(Self::storage_err())
        }

        async fn clear_all(&self) -> Result<(), QueueError> {
            Err(Self::storage_err())
        }
    }

    #[tokio::test]
    async fn backend_failures_surface_as_storage_errors() {
        let queue = UnreachableStore;

        let err = queue.enqueue(Job::new("{}")).await.unwrap_err();
        assert_eq!(err.as_label(), "queue_storage");
        assert!(err.to_string().contains("connection refused"));

        let err = queue.dequeue_next().await.unwrap_err();
        assert!(matches!(err, QueueError::Storage { .. }));
    }
}
