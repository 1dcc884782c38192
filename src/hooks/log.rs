//! # Ready-made logging hooks for debugging and demos.
//!
//! [`log_hooks`] returns a [`Hooks`] set that records each lifecycle
//! transition through `tracing`. Useful for development; production users
//! typically wire their own hooks (metrics, status updates).
//!
//! ## Output shape
//! ```text
//! INFO  job starting   job=7b0f…
//! INFO  job succeeded  job=7b0f…
//! WARN  job failed     job=7b0f… label=job_timeout error=timed out after 50ms
//! DEBUG job completed  job=7b0f…
//! ```

use super::Hooks;

/// Returns hooks that log every transition.
pub fn log_hooks() -> Hooks {
    Hooks::new()
        .on_start(|job| tracing::info!(job = %job.id, "job starting"))
        .on_success(|job| tracing::info!(job = %job.id, "job succeeded"))
        .on_failure(|job, err| {
            tracing::warn!(job = %job.id, label = err.as_label(), error = %err, "job failed");
        })
        .on_completion(|job| tracing::debug!(job = %job.id, "job completed"))
}
