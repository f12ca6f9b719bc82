//! Batch scheduler and schedule metrics.
//!
//! `Scheduler` validates input, runs one discipline and derives metrics.
//! `ScheduleSummary` holds the batch averages.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

mod runner;
mod summary;

pub use runner::{ScheduleError, ScheduleRequest, Scheduler};
pub use summary::{derive_metrics, ScheduleSummary};
