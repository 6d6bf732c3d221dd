//! Worker pool for the parallel vanity key search.
//!
//! This module provides:
//! - Multi-threaded CPU workers racing against a shared stop condition
//! - First-match-wins coordination with an aggregated attempt count

mod cpu;
mod pool;

pub use cpu::{CpuWorker, SearchState};
pub use pool::{VanityMatch, WorkerPool};
