//! # Worker builder.
//!
//! Assembles a [`Worker`] from its construction surface: name, handler,
//! optional lifecycle hooks, and the concurrency/retry knobs. Unset knobs use
//! the [`WorkerConfig`] defaults (`concurrency = 5`, `retries = 0`); unset
//! hook slots stay no-op.

use crate::error::JobError;
use crate::hooks::Hooks;
use crate::jobs::{HandlerRef, Job};
use crate::worker::{Worker, WorkerConfig};

/// Builder for [`Worker`].
///
/// ## Example
/// ```
/// use jobrun::{HandlerFn, Worker};
///
/// let worker = Worker::builder("mailer", HandlerFn::arc(|_: String| async { Ok(()) }))
///     .concurrency(2)
///     .retries(3)
///     .on_failure(|job, err| eprintln!("job {} failed: {err}", job.id))
///     .build();
///
/// assert_eq!(worker.name(), "mailer");
/// assert_eq!(worker.concurrency(), 2);
/// ```
pub struct WorkerBuilder<T> {
    config: WorkerConfig,
    handler: HandlerRef<T>,
    hooks: Hooks,
}

impl<T> WorkerBuilder<T>
where
    T: serde::de::DeserializeOwned + Clone + Send + 'static,
{
    pub(crate) fn new(name: impl Into<String>, handler: HandlerRef<T>) -> Self {
        Self {
            config: WorkerConfig::new(name),
            handler,
            hooks: Hooks::new(),
        }
    }

    /// Sets the concurrency budget (values below 1 are clamped to 1).
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Sets the max retry count (`0` keeps timeout-only/plain semantics).
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Replaces the whole hook set at once.
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the `on_start` hook.
    pub fn on_start(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_start(f);
        self
    }

    /// Sets the `on_success` hook.
    pub fn on_success(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_success(f);
        self
    }

    /// Sets the `on_failure` hook.
    pub fn on_failure(mut self, f: impl Fn(&Job, &JobError) + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_failure(f);
        self
    }

    /// Sets the `on_completion` hook.
    pub fn on_completion(mut self, f: impl Fn(&Job) + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_completion(f);
        self
    }

    /// Builds the worker.
    pub fn build(self) -> Worker<T> {
        Worker::new(self.config, self.handler, self.hooks)
    }
}
