//! Schedule accumulator.
//!
//! Derives per-process metrics from an execution trace and computes the
//! batch-level averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last slice |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first slice start - arrival |
//! | Makespan | Latest completion time |
//! | Context switches | Adjacent slices of different processes |
//!
//! "Arrival" is the process's `arrival_time` for disciplines that honor it
//! and 0 otherwise.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionSlice, Process, ProcessId, ProcessMetrics};

/// Batch-level schedule indicators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Number of times the CPU switched between processes.
    pub context_switches: usize,
}

impl ScheduleSummary {
    /// Computes the summary from per-process metrics and the trace.
    ///
    /// Averages use real division; an empty input yields all zeros.
    pub fn calculate(metrics: &[ProcessMetrics], trace: &[ExecutionSlice]) -> Self {
        let context_switches = trace
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        if metrics.is_empty() {
            return Self {
                context_switches,
                ..Self::default()
            };
        }

        let n = metrics.len() as f64;
        // Summed as f64: n values each up to the makespan can exceed i64.
        let total_waiting: f64 = metrics.iter().map(|m| m.waiting_time as f64).sum();
        let total_turnaround: f64 = metrics.iter().map(|m| m.turnaround_time as f64).sum();
        let total_response: f64 = metrics.iter().map(|m| m.response_time as f64).sum();

        Self {
            average_waiting_time: total_waiting / n,
            average_turnaround_time: total_turnaround / n,
            average_response_time: total_response / n,
            makespan: metrics.iter().map(|m| m.completion_time).max().unwrap_or(0),
            context_switches,
        }
    }
}

/// Derives per-process metrics from a trace.
///
/// Results are ordered by each process's first slice. Processes with no
/// slice in the trace are omitted.
pub fn derive_metrics(
    processes: &[Process],
    trace: &[ExecutionSlice],
    honors_arrival: bool,
) -> Vec<ProcessMetrics> {
    let by_id: HashMap<ProcessId, &Process> = processes.iter().map(|p| (p.id, p)).collect();

    // (first start, completion) per process, in first-dispatch order
    let mut order: Vec<ProcessId> = Vec::new();
    let mut spans: HashMap<ProcessId, (i64, i64)> = HashMap::new();

    for slice in trace {
        spans
            .entry(slice.process_id)
            .and_modify(|span| span.1 = span.1.max(slice.end_time()))
            .or_insert_with(|| {
                order.push(slice.process_id);
                (slice.start_time, slice.end_time())
            });
    }

    order
        .into_iter()
        .filter_map(|id| {
            let process = *by_id.get(&id)?;
            let (first_start, completion_time) = spans[&id];
            let arrival = if honors_arrival {
                process.arrival_time
            } else {
                0
            };
            let turnaround_time = completion_time - arrival;
            Some(ProcessMetrics {
                process: *process,
                completion_time,
                waiting_time: turnaround_time - process.burst_time,
                turnaround_time,
                response_time: first_start - arrival,
            })
        })
        .collect()
}
