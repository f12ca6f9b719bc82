//! CPU-scheduling domain models.
//!
//! Provides the data types for a scheduling batch and its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Static description of one schedulable unit |
//! | `ExecutionSlice` | One contiguous run on the CPU |
//! | `ProcessMetrics` | Completion, waiting, turnaround and response times |
//! | `ScheduleResult` | Trace, metrics and summary of one discipline run |

mod process;
mod schedule;
mod trace;

pub use process::{Process, ProcessId};
pub use schedule::{ProcessMetrics, ScheduleResult};
pub use trace::ExecutionSlice;
