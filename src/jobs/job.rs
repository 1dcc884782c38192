//! # Job record: one unit of work plus its execution parameters.
//!
//! A [`Job`] is owned by the job source until dispatched; ownership of a
//! single in-flight attempt transfers to the worker for the duration of
//! execution. The record is immutable once handed to the worker — a retried
//! attempt is a new logical attempt over the same job identity.
//!
//! ## Timeout semantics
//! `timeout == Duration::ZERO` means unbounded. When the worker is configured
//! with `retries > 0`, the same field is interpreted as the delay between
//! retry attempts instead of a per-attempt deadline (see
//! [`ExecMode`](crate::policies::ExecMode)).
//!
//! ## Bookkeeping fields
//! `attempts`, `status` and `last_error` exist for the job source's benefit
//! (persisting progress between dispatches). The engine never mutates them.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::JobError;

/// Opaque job identifier.
///
/// Random (v4) underneath; stable for the job's lifetime across attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Source-side job state.
///
/// Maintained by whoever owns the job source; the worker reports outcomes
/// through its return value and hooks, and the caller decides how to update
/// the stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Waiting in the source.
    #[default]
    Queued,
    /// Dispatched to a worker.
    Running,
    /// Finished successfully.
    Done,
    /// Terminally failed (after any internal retries).
    Failed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Done => "done",
            JobStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Description of one unit of work.
///
/// The payload is carried as raw JSON text; the worker deserializes it into
/// the handler's input type per execution (a decode failure is fatal for the
/// attempt and is not retried).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    /// Job identity, stable across attempts.
    pub id: JobId,
    /// Raw payload (JSON).
    pub payload: String,
    /// Per-attempt deadline, or inter-attempt delay in retry mode.
    /// `Duration::ZERO` = unbounded / no delay.
    #[serde(default)]
    pub timeout: Duration,
    /// Source-side attempt counter.
    #[serde(default)]
    pub attempts: u32,
    /// Source-side state.
    #[serde(default)]
    pub status: JobStatus,
    /// Last terminal failure reported for this job, if any.
    #[serde(default)]
    pub last_error: Option<String>,
}

impl Job {
    /// Creates a queued job with a fresh id, no timeout, and the given raw payload.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            id: JobId::generate(),
            payload: payload.into(),
            timeout: Duration::ZERO,
            attempts: 0,
            status: JobStatus::Queued,
            last_error: None,
        }
    }

    /// Creates a job by serializing a typed payload to JSON.
    pub fn encode<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::to_string(payload)?))
    }

    /// Returns the job with an updated timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deserializes the payload into the handler's input type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, JobError> {
        serde_json::from_str(&self.payload).map_err(|e| JobError::Decode {
            error: e.to_string(),
        })
    }
}
