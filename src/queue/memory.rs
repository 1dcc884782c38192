//! In-process FIFO job source.
//!
//! [`MemoryQueue`] keeps jobs in a `VecDeque` behind a `parking_lot::Mutex`.
//! It provides no durability — restart loses everything — and exists as the
//! reference implementation for tests, demos, and single-process deployments.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::QueueError;
use crate::jobs::{Job, JobId};
use crate::queue::JobQueue;

/// FIFO in-memory job source.
#[derive(Default)]
pub struct MemoryQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl MemoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.jobs.lock().len()
    }

    /// True when no jobs are stored.
    pub fn is_empty(&self) -> bool {
        self.jobs.lock().is_empty()
    }
}

#[async_trait]
impl JobQueue for MemoryQueue {
    async fn enqueue(&self, job: Job) -> Result<(), QueueError> {
        self.jobs.lock().push_back(job);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Job>, QueueError> {
        Ok(self.jobs.lock().iter().cloned().collect())
    }

    async fn dequeue_next(&self) -> Result<Job, QueueError> {
        self.jobs.lock().pop_front().ok_or(QueueError::Empty)
    }

    // Claim semantics are meaningless in-process; the worker name is accepted
    // for contract parity with persistent sources and otherwise ignored.
    async fn dequeue_batch(&self, _worker_name: &str, count: usize) -> Result<Vec<Job>, QueueError> {
        let mut jobs = self.jobs.lock();
        let take = count.min(jobs.len());
        Ok(jobs.drain(..take).collect())
    }

    async fn update(&self, job: Job) -> Result<(), QueueError> {
        let mut jobs = self.jobs.lock();
        match jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => {
                *slot = job;
                Ok(())
            }
            None => Err(QueueError::NotFound { id: job.id }),
        }
    }

    async fn remove(&self, id: &JobId) -> Result<(), QueueError> {
        let mut jobs = self.jobs.lock();
        match jobs.iter().position(|j| j.id == *id) {
            Some(idx) => {
                let _removed = jobs.remove(idx);
                Ok(())
            }
            None => Err(QueueError::NotFound { id: *id }),
        }
    }

    async fn clear_all(&self) -> Result<(), QueueError> {
        self.jobs.lock().clear();
        Ok(())
    }
}
