//! Schedule (solution) model.
//!
//! A schedule result holds the slice trace a discipline produced, the
//! per-process metrics derived from it, and the batch summary.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::{ExecutionSlice, Process, ProcessId};
use crate::disciplines::Discipline;
use crate::scheduler::ScheduleSummary;

/// Timing metrics of one process under a completed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// The scheduled process.
    pub process: Process,
    /// End of the process's last slice (ticks).
    pub completion_time: i64,
    /// Time spent ready but not running: completion - arrival - burst.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Process identifier shortcut.
    #[inline]
    pub fn id(&self) -> ProcessId {
        self.process.id
    }
}

/// A completed schedule for one batch under one discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this schedule.
    pub discipline: Discipline,
    /// CPU slices in dispatch order.
    pub trace: Vec<ExecutionSlice>,
    /// Per-process metrics, ordered by first dispatch.
    pub metrics: Vec<ProcessMetrics>,
    /// Batch-level averages.
    pub summary: ScheduleSummary,
}

impl ScheduleResult {
    /// Finds the metrics for a given process.
    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id() == id)
    }

    /// Returns all slices of a given process.
    pub fn slices_for(&self, id: ProcessId) -> Vec<&ExecutionSlice> {
        self.trace.iter().filter(|s| s.process_id == id).collect()
    }

    /// Process IDs in dispatch order (order of first slice).
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.metrics.iter().map(ProcessMetrics::id).collect()
    }

    /// Process IDs ordered by completion time.
    ///
    /// Ties keep dispatch order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut ordered: Vec<&ProcessMetrics> = self.metrics.iter().collect();
        ordered.sort_by_key(|m| m.completion_time);
        ordered.into_iter().map(ProcessMetrics::id).collect()
    }

    /// Number of processes in the schedule.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }
}
