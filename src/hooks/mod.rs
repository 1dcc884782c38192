//! Lifecycle hooks observed around each job execution.
//!
//! ## Architecture
//! ```text
//! Worker::execute(job)
//!   ├─► decode payload ──(err)──► on_failure ──► on_completion
//!   ├─► on_start
//!   ├─► [execution mode: plain / timeout / retry]
//!   ├─► on_success  (ok)   │  on_failure  (terminal err)
//!   └─► on_completion      (always, exactly once, final step)
//! ```
//!
//! ## Contents
//! - [`Hooks`] — four independently-optional callback slots, no-op by default
//! - [`log_hooks`] — ready-made hooks that log each transition via `tracing`

mod log;
mod sink;

pub use log::log_hooks;
pub use sink::Hooks;
