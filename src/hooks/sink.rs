//! # Hooks: optional lifecycle callback slots.
//!
//! [`Hooks`] bundles up to four observer callbacks invoked around each job
//! execution. An unset slot is a no-op, not an error.
//!
//! ## Ordering guarantees
//! For one job the order is always `start → (success xor failure) →
//! completion`. Across concurrent jobs on the same worker no ordering is
//! guaranteed — invocations may interleave arbitrarily.
//!
//! ## Panic policy
//! A panicking hook is caught and logged (`tracing::warn!`); it never aborts
//! the attempt and never suppresses later hooks. In particular,
//! `on_completion` still fires after `on_failure` panics.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::JobError;
use crate::jobs::Job;

type JobHook = Arc<dyn Fn(&Job) + Send + Sync>;
type FailureHook = Arc<dyn Fn(&Job, &JobError) + Send + Sync>;

/// Observer callbacks invoked around each execution.
///
/// Callbacks receive the job record; `on_failure` additionally receives the
/// terminal error. Failure callbacks fire once per `execute` call (for the
/// terminal failure), not once per retry attempt.
#[derive(Clone, Default)]
pub struct Hooks {
    on_start: Option<JobHook>,
    on_success: Option<JobHook>,
    on_failure: Option<FailureHook>,
    on_completion: Option<JobHook>,
}

impl Hooks {
    /// Creates an empty hook set (all slots no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback fired when an execution starts (after payload decode).
    pub fn on_start(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.on_start = Some(Arc::new(f));
        self
    }

    /// Sets the callback fired when an execution succeeds.
    pub fn on_success(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(f));
        self
    }

    /// Sets the callback fired on terminal failure (decode, timeout,
    /// exhausted retries, or plain handler failure).
    pub fn on_failure(mut self, f: impl Fn(&Job, &JobError) + Send + Sync + 'static) -> Self {
        self.on_failure = Some(Arc::new(f));
        self
    }

    /// Sets the callback fired exactly once as the final step of every
    /// execution, regardless of outcome.
    pub fn on_completion(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.on_completion = Some(Arc::new(f));
        self
    }

    pub(crate) fn fire_start(&self, job: &Job) {
        if let Some(f) = &self.on_start {
            guarded("on_start", || f(job));
        }
    }

    pub(crate) fn fire_success(&self, job: &Job) {
        if let Some(f) = &self.on_success {
            guarded("on_success", || f(job));
        }
    }

    pub(crate) fn fire_failure(&self, job: &Job, err: &JobError) {
        if let Some(f) = &self.on_failure {
            guarded("on_failure", || f(job, err));
        }
    }

    pub(crate) fn fire_completion(&self, job: &Job) {
        if let Some(f) = &self.on_completion {
            guarded("on_completion", || f(job));
        }
    }
}

/// Runs a hook, catching panics so one misbehaving observer cannot break the
/// execution path or suppress later hooks.
fn guarded(slot: &'static str, call: impl FnOnce()) {
    if let Err(panic) = catch_unwind(AssertUnwindSafe(call)) {
        let msg = panic
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        tracing::warn!(hook = slot, panic = %msg, "lifecycle hook panicked");
    }
}
