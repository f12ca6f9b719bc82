//! Execution trace model.
//!
//! A trace is the ordered list of CPU slices a discipline produced.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous run of a process on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Slice start (ticks).
    pub start_time: i64,
    /// Slice length (ticks).
    pub duration: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start_time: i64, duration: i64) -> Self {
        Self {
            process_id,
            start_time,
            duration,
        }
    }

    /// Slice end (exclusive).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }
}
