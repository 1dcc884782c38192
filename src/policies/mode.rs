//! # Execution mode resolution.
//!
//! [`ExecMode`] is a pure function of `(timeout, retries)` — no hidden state,
//! deterministic and total over all non-negative pairs.
//!
//! ## Rules
//! - `retries > 0` wins over timeout-only mode; the job's `timeout` field is
//!   then reinterpreted as the **delay between attempts**, not a deadline.
//! - `retries == 0 && timeout > 0` → timeout-only mode.
//! - otherwise → plain mode (run to completion, unbounded).

use std::time::Duration;

/// How one `execute` call is bounded and retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    /// Run the handler to completion, unbounded.
    Plain,
    /// Race the handler against a timer; the timer elapsing fails the attempt.
    Timeout(Duration),
    /// Invoke the handler up to `retries + 1` times with a fixed delay
    /// between attempts. Retries are unconditional on failure type.
    Retry {
        /// Maximum number of retries after the first attempt.
        retries: u32,
        /// Fixed sleep between attempts.
        delay: Duration,
    },
}

impl ExecMode {
    /// Resolves the execution mode for a job.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use jobrun::ExecMode;
    ///
    /// assert_eq!(ExecMode::resolve(Duration::ZERO, 0), ExecMode::Plain);
    /// assert_eq!(
    ///     ExecMode::resolve(Duration::from_secs(5), 0),
    ///     ExecMode::Timeout(Duration::from_secs(5)),
    /// );
    /// assert_eq!(
    ///     ExecMode::resolve(Duration::from_secs(1), 3),
    ///     ExecMode::Retry { retries: 3, delay: Duration::from_secs(1) },
    /// );
    /// ```
    pub fn resolve(timeout: Duration, retries: u32) -> Self {
        if retries > 0 {
            ExecMode::Retry {
                retries,
                delay: timeout,
            }
        } else if timeout > Duration::ZERO {
            ExecMode::Timeout(timeout)
        } else {
            ExecMode::Plain
        }
    }
}
