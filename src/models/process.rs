//! Process (schedulable unit) model.
//!
//! A process is the static description of one CPU-bound job: how much CPU
//! time it needs, when it becomes eligible to run, and its static priority.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within a batch.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are abstract ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Total CPU time required (ticks). Must be positive.
    pub burst_time: i64,
    /// Time at which the process becomes ready (ticks).
    #[serde(default)]
    pub arrival_time: i64,
    /// Static priority (lower = runs sooner).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process ready at t=0 with priority 0.
    pub fn new(id: ProcessId, burst_time: i64) -> Self {
        Self {
            id,
            burst_time,
            arrival_time: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Display label used in reports (e.g. `P3`).
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 10).with_arrival_time(2).with_priority(-1);
        assert_eq!(p.id, 3);
        assert_eq!(p.burst_time, 10);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.priority, -1);
        assert_eq!(p.label(), "P3");
    }

    #[test]
    fn test_process_defaults_from_json() {
        let p: Process = serde_json::from_str(r#"{"id": 1, "burst_time": 5}"#).unwrap();
        assert_eq!(p, Process::new(1, 5));
    }
}
