//! # Worker configuration.
//!
//! Provides [`WorkerConfig`] — settings fixed at construction and immutable
//! for the worker's lifetime.
//!
//! ## Field semantics
//! - `name`: worker identity, used by dispatchers when claiming batches
//! - `concurrency`: capacity budget (min 1; clamped by the worker)
//! - `retries`: max retry count (`0` = no retry mode; a job's timeout then
//!   acts as a per-attempt deadline instead of an inter-attempt delay)

/// Settings for a [`Worker`](crate::Worker).
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Worker identity (for logs and batch claims).
    pub name: String,

    /// Maximum number of jobs in flight at once.
    ///
    /// Values below 1 are clamped to 1 at construction.
    pub concurrency: usize,

    /// Maximum number of retries after the first attempt.
    ///
    /// When `> 0`, every job this worker executes runs in retry mode and its
    /// `timeout` field is reinterpreted as the inter-attempt delay.
    pub retries: u32,
}

impl WorkerConfig {
    /// Creates a config with the given name and default policy knobs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the concurrency budget clamped to a minimum of 1.
    #[inline]
    pub fn concurrency_clamped(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for WorkerConfig {
    /// Default configuration:
    ///
    /// - `name = "worker"`
    /// - `concurrency = 5`
    /// - `retries = 0`
    fn default() -> Self {
        Self {
            name: "worker".to_string(),
            concurrency: 5,
            retries: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = WorkerConfig::default();
        assert_eq!(cfg.concurrency, 5);
        assert_eq!(cfg.retries, 0);
    }

    #[test]
    fn concurrency_is_clamped() {
        let cfg = WorkerConfig {
            concurrency: 0,
            ..WorkerConfig::new("w")
        };
        assert_eq!(cfg.concurrency_clamped(), 1);
    }
}
