//! # Run a decoded payload under one execution mode.
//!
//! Executes the handler according to the resolved [`ExecMode`]:
//!
//! ```text
//! Plain:
//!   run_once(payload) → handler result, unmodified
//!
//! Timeout(deadline):
//!   race handler against timer
//!     handler first → its result
//!     timer first   → drop handler future, Err(Timeout)
//!
//! Retry{retries, delay}:
//!   loop (attempt 0..=retries):
//!     run_once(payload.clone())
//!       Ok            → resolve
//!       Err, last one → Err(RetriesExhausted{retries, last error})
//!       Err           → sleep(delay), next attempt
//! ```
//!
//! ## Rules
//! - Retry mode performs up to `retries + 1` handler invocations; retries are
//!   unconditional on failure type.
//! - Losing the timeout race **drops** the handler future — in this runtime
//!   dropping a future cancels it, so an overrunning handler does not keep
//!   holding resources in the background.
//! - A panicking handler is caught and surfaced as [`JobError::Fail`], so the
//!   caller's completion guarantees hold even for buggy handlers.

use std::any::Any;

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::time;

use crate::error::JobError;
use crate::jobs::Handler;
use crate::policies::ExecMode;

/// Runs the handler over the payload under the given mode.
pub(crate) async fn run_mode<T>(
    handler: &dyn Handler<T>,
    payload: T,
    mode: ExecMode,
) -> Result<(), JobError>
where
    T: Clone + Send + 'static,
{
    match mode {
        ExecMode::Plain => run_once(handler, payload).await,

        ExecMode::Timeout(deadline) => {
            match time::timeout(deadline, run_once(handler, payload)).await {
                Ok(res) => res,
                Err(_elapsed) => Err(JobError::Timeout { timeout: deadline }),
            }
        }

        ExecMode::Retry { retries, delay } => {
            let mut attempt: u32 = 0;
            loop {
                match run_once(handler, payload.clone()).await {
                    Ok(()) => return Ok(()),
                    Err(err) if attempt >= retries => {
                        return Err(JobError::RetriesExhausted {
                            retries,
                            error: err.to_string(),
                        });
                    }
                    Err(_) => {
                        attempt += 1;
                        time::sleep(delay).await;
                    }
                }
            }
        }
    }
}

/// Executes a single handler invocation, converting panics into failures.
async fn run_once<T>(handler: &dyn Handler<T>, payload: T) -> Result<(), JobError>
where
    T: Send + 'static,
{
    match AssertUnwindSafe(handler.run(payload)).catch_unwind().await {
        Ok(res) => res,
        Err(panic) => Err(JobError::Fail {
            error: panic_message(panic),
        }),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("handler panicked: {s}")
    } else {
        "handler panicked".to_string()
    }
}
