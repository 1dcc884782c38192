//! Execution core: capacity-bounded job execution.
//!
//! This module contains the engine's moving parts. The only public API is
//! [`Worker`] (plus its [`WorkerBuilder`] and [`WorkerConfig`]), which runs
//! one job attempt end to end under concurrency, timeout, and retry policy.
//!
//! Internal modules:
//! - [`runner`]: executes the handler under one resolved [`ExecMode`](crate::policies::ExecMode);
//! - [`capacity`]: atomic in-flight counter with RAII slot guards;
//! - [`worker`]: orchestrates decode, hooks, mode dispatch, and capacity;
//! - [`config`] / [`builder`]: construction surface.

mod builder;
mod capacity;
mod config;
mod runner;
#[allow(clippy::module_inception)]
mod worker;

pub use builder::WorkerBuilder;
pub use config::WorkerConfig;
pub use worker::Worker;
