//! # Worker: runs one job attempt end to end.
//!
//! Supervises execution of a single [`Job`] with policies:
//! - capacity accounting per [`Capacity`] (RAII slot guards),
//! - exactly one execution mode per [`ExecMode::resolve`],
//! - lifecycle notification through [`Hooks`], guaranteed on every path.
//!
//! ## Hook flow
//! For each `execute` call:
//! ```text
//! decode err:  on_failure → on_completion            (on_start never fires)
//! success:     on_start → on_success → on_completion
//! failure:     on_start → on_failure → on_completion
//! ```
//!
//! ## Rules
//! - Hooks fire **per execute call**, not per retry attempt; `on_failure`
//!   observes only the terminal error.
//! - `on_completion` fires exactly once as the final step, even when the
//!   handler or another hook panics.
//! - The capacity slot is taken on entry and released on every exit path.
//! - The worker never blocks or queues when full: callers check
//!   [`available_capacity`](Worker::available_capacity) before dispatching.

use serde::de::DeserializeOwned;

use crate::error::JobError;
use crate::hooks::Hooks;
use crate::jobs::{HandlerRef, Job};
use crate::policies::ExecMode;
use crate::worker::capacity::Capacity;
use crate::worker::runner::run_mode;
use crate::worker::{WorkerBuilder, WorkerConfig};

/// Capacity-bounded executor for jobs whose payload decodes to `T`.
///
/// ## Example
/// ```
/// use jobrun::{HandlerFn, Job, Worker};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let worker = Worker::builder("resize", HandlerFn::arc(|width: u32| async move {
///     assert!(width > 0);
///     Ok(())
/// }))
/// .concurrency(2)
/// .build();
///
/// assert_eq!(worker.available_capacity(), 2);
/// worker.execute(Job::encode(&640u32).unwrap()).await.unwrap();
/// # }
/// ```
pub struct Worker<T> {
    config: WorkerConfig,
    handler: HandlerRef<T>,
    hooks: Hooks,
    capacity: Capacity,
}

impl<T> Worker<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    /// Creates a worker from an explicit config.
    pub fn new(config: WorkerConfig, handler: HandlerRef<T>, hooks: Hooks) -> Self {
        let capacity = Capacity::new(config.concurrency_clamped());
        Self {
            config,
            handler,
            hooks,
            capacity,
        }
    }

    /// Starts a builder with default config (`concurrency = 5`, `retries = 0`).
    pub fn builder(name: impl Into<String>, handler: HandlerRef<T>) -> WorkerBuilder<T> {
        WorkerBuilder::new(name, handler)
    }

    /// Worker identity.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Concurrency budget.
    pub fn concurrency(&self) -> usize {
        self.capacity.limit()
    }

    /// True iff every slot is occupied.
    pub fn is_busy(&self) -> bool {
        self.capacity.is_busy()
    }

    /// Free slots; callers use this to decide how many jobs to dispatch.
    pub fn available_capacity(&self) -> usize {
        self.capacity.available()
    }

    /// Runs one job attempt end to end.
    ///
    /// Precondition: the caller has verified capacity is available. The
    /// worker takes a slot unconditionally (pull-based dispatch: it trusts
    /// the caller rather than queueing internally).
    ///
    /// Returns the handler's success, or the terminal error after the
    /// resolved execution mode ran its course. Internal retries are invisible
    /// to the caller — this either fully succeeds or fully fails.
    pub async fn execute(&self, job: Job) -> Result<(), JobError> {
        let _slot = self.capacity.occupy();

        let result = self.execute_inner(&job).await;

        // Final step on every path; the slot guard releases right after.
        self.hooks.fire_completion(&job);
        result
    }

    async fn execute_inner(&self, job: &Job) -> Result<(), JobError> {
        // Decode failure short-circuits before on_start: the job never
        // logically started, but failure and completion still observe it.
        let payload: T = match job.decode() {
            Ok(p) => p,
            Err(err) => {
                self.hooks.fire_failure(job, &err);
                return Err(err);
            }
        };

        self.hooks.fire_start(job);

        let mode = ExecMode::resolve(job.timeout, self.config.retries);
        match run_mode(self.handler.as_ref(), payload, mode).await {
            Ok(()) => {
                self.hooks.fire_success(job);
                Ok(())
            }
            Err(err) => {
                self.hooks.fire_failure(job, &err);
                Err(err)
            }
        }
    }
}
