//! The runner is responsible for reading account rows from CSV,
//! running a tour over them, and writing the statements to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;
