//! Job records and handler abstractions.
//!
//! This module provides the core job-related types:
//! - [`Job`] - immutable description of one unit of work plus execution parameters
//! - [`JobId`] / [`JobStatus`] - identity and source-side bookkeeping
//! - [`Handler`] - trait for implementing async payload handlers
//! - [`HandlerFn`] - function-backed handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler<T>>`)

mod handler;
mod job;

pub use handler::{Handler, HandlerFn, HandlerRef};
pub use job::{Job, JobId, JobStatus};
