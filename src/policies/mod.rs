//! Execution policies.
//!
//! This module groups the decision logic that controls **how** a single job
//! execution is bounded in time and **whether** failures are retried.
//!
//! ## Contents
//! - [`ExecMode`] — pure mapping from `(timeout, retries)` to an execution mode
//!
//! ## Quick wiring
//! ```text
//! Job { timeout } + WorkerConfig { retries }
//!      └─► ExecMode::resolve(timeout, retries)
//!           ├─► Plain                  run handler to completion
//!           ├─► Timeout(deadline)      race handler against a timer
//!           └─► Retry{retries, delay}  loop with fixed inter-attempt delay
//! ```

mod mode;

pub use mode::ExecMode;
