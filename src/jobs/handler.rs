//! # Handler abstraction and function-backed implementation.
//!
//! This module defines the [`Handler`] trait (async, typed payload) and a
//! convenient function-backed implementation [`HandlerFn`]. The common handle
//! type is [`HandlerRef`], an `Arc<dyn Handler<T>>` suitable for sharing
//! across worker instances.
//!
//! A handler receives the decoded payload by value; retry mode clones the
//! payload per attempt, so each invocation owns its input.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::JobError;

/// Shared handle to a handler.
pub type HandlerRef<T> = Arc<dyn Handler<T>>;

/// # Asynchronous payload handler.
///
/// A `Handler` is the user-supplied unit of work: given a decoded payload it
/// performs the job and reports success or failure. Failures should be
/// reported as [`JobError::Fail`]; the engine maps terminal retry exhaustion
/// and timeouts itself.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use jobrun::{Handler, JobError};
///
/// struct Fetch;
///
/// #[async_trait]
/// impl Handler<String> for Fetch {
///     async fn run(&self, url: String) -> Result<(), JobError> {
///         if url.is_empty() {
///             return Err(JobError::Fail { error: "empty url".into() });
///         }
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Handler<T: Send + 'static>: Send + Sync + 'static {
    /// Executes one attempt over the decoded payload.
    async fn run(&self, payload: T) -> Result<(), JobError>;
}

/// Function-backed handler implementation.
///
/// Wraps a closure that *creates* a new future per attempt, so there is no
/// shared mutable state between attempts. If shared state is needed, move an
/// `Arc<...>` into the closure explicitly.
///
/// ## Example
/// ```
/// use jobrun::{HandlerFn, HandlerRef, JobError};
///
/// let h: HandlerRef<u32> = HandlerFn::arc(|n: u32| async move {
///     if n == 0 {
///         return Err(JobError::Fail { error: "zero".into() });
///     }
///     Ok(())
/// });
/// ```
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc<T>(f: F) -> HandlerRef<T>
    where
        T: Send + 'static,
        Self: Handler<T>,
    {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<T, F, Fut> Handler<T> for HandlerFn<F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), JobError>> + Send + 'static,
{
    async fn run(&self, payload: T) -> Result<(), JobError> {
        (self.f)(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handler_fn_forwards_result() {
        let h: HandlerRef<u32> = HandlerFn::arc(|n: u32| async move {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err(JobError::Fail {
                    error: format!("odd: {n}"),
                })
            }
        });

        assert!(h.run(2).await.is_ok());
        let err = h.run(3).await.unwrap_err();
        assert_eq!(err.as_label(), "job_failed");
    }

    #[tokio::test]
    async fn handler_fn_creates_fresh_future_per_run() {
        let h = HandlerFn::new(|n: u64| async move {
            tokio::task::yield_now().await;
            assert!(n < 10);
            Ok(())
        });
        for n in 0..3 {
            h.run(n).await.unwrap();
        }
    }
}
