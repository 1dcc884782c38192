//! # jobrun
//!
//! **jobrun** is a lightweight job-execution engine for Rust.
//!
//! Given a stream of queued work items, it runs each item's payload through a
//! user-supplied handler under configurable concurrency, timeout, and retry
//! policies, and reports lifecycle events (start, success, failure,
//! completion). The crate is designed as a building block for higher-level
//! queue runners and daemons.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌─────────────┐      ┌──────────────────────────────────────────────┐
//!  │  JobQueue   │      │  Worker (execution engine)                   │
//!  │ (job source)│─────►│  - Capacity (atomic in-flight counter)       │
//!  │             │ pull │  - ExecMode (plain / timeout / retry)        │
//!  │ enqueue     │◄─────│  - Hooks (start/success/failure/completion)  │
//!  │ update/...  │ ack  │  - Handler<T> (user-supplied, async)         │
//!  └─────────────┘      └──────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! dispatcher: while worker.available_capacity() > 0 { dequeue, execute }
//!
//! Worker::execute(job)
//!   ├─► occupy capacity slot (released on every path)
//!   ├─► decode payload ──(err)──► on_failure ──► on_completion ──► Err(Decode)
//!   ├─► on_start
//!   ├─► ExecMode::resolve(job.timeout, cfg.retries)
//!   │     ├─ Plain              run handler to completion
//!   │     ├─ Timeout(deadline)  race against timer (loser is dropped)
//!   │     └─ Retry{n, delay}    up to n+1 attempts, fixed delay between
//!   ├─► Ok  ──► on_success
//!   ├─► Err ──► on_failure(err)
//!   └─► on_completion (always, exactly once, final step)
//! ```
//!
//! ## Features
//! | Area          | Description                                           | Key types / traits                   |
//! |---------------|-------------------------------------------------------|--------------------------------------|
//! | **Jobs**      | Describe units of work with payload + parameters.     | [`Job`], [`JobId`], [`JobStatus`]     |
//! | **Handlers**  | Implement work as async functions or trait objects.   | [`Handler`], [`HandlerFn`], [`HandlerRef`] |
//! | **Policies**  | Pick how an execution is bounded and retried.         | [`ExecMode`]                          |
//! | **Hooks**     | Observe lifecycle transitions (logging, status).      | [`Hooks`], [`log_hooks`]              |
//! | **Sources**   | Feed workers through a narrow pull/ack contract.      | [`JobQueue`], [`MemoryQueue`]         |
//! | **Errors**    | Typed errors for execution and sources.               | [`JobError`], [`QueueError`]          |
//!
//! ## Example
//! ```
//! use jobrun::{HandlerFn, Job, JobQueue, MemoryQueue, Worker};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct Resize { width: u32, height: u32 }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let queue = MemoryQueue::new();
//!     queue.enqueue(Job::encode(&Resize { width: 640, height: 480 })?).await?;
//!
//!     let worker = Worker::builder("thumbnails", HandlerFn::arc(|r: Resize| async move {
//!         assert!(r.width > 0 && r.height > 0);
//!         // resize...
//!         Ok(())
//!     }))
//!     .concurrency(2)
//!     .build();
//!
//!     // Pull-based dispatch: the caller checks capacity, the worker trusts it.
//!     for job in queue.dequeue_batch(worker.name(), worker.available_capacity()).await? {
//!         worker.execute(job).await?;
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod hooks;
mod jobs;
mod policies;
mod queue;
mod worker;

// ---- Public re-exports ----

pub use error::{JobError, QueueError};
pub use hooks::{log_hooks, Hooks};
pub use jobs::{Handler, HandlerFn, HandlerRef, Job, JobId, JobStatus};
pub use policies::ExecMode;
pub use queue::{JobQueue, MemoryQueue};
pub use worker::{Worker, WorkerBuilder, WorkerConfig};
