//! Job source: the external supplier/consumer of jobs.
//!
//! The worker depends on a source only through the narrow pull/ack-like
//! [`JobQueue`] contract; capacity-aware dispatch stays with the caller.
//!
//! ## Contents
//! - [`JobQueue`] — abstract source contract (enqueue/dequeue/update/remove)
//! - [`MemoryQueue`] — in-process FIFO reference implementation

mod memory;
mod source;

pub use memory::MemoryQueue;
pub use source::JobQueue;
