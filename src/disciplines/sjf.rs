//! Shortest-Job-First (non-preemptive).
//!
//! Every process is treated as ready at t=0; the batch runs in ascending
//! burst order. This is not Shortest-Remaining-Time-First: a running job
//! is never preempted.
//!
//! # Reference
//! Smith (1956), SPT sequencing minimizes mean flow time on a single machine.

use super::{run_in_order, stable_order, SchedulingDiscipline};
use crate::models::{ExecutionSlice, Process};

/// Shortest-Job-First. Equal bursts keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingDiscipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn dispatch(&self, processes: &[Process]) -> Vec<ExecutionSlice> {
        let order = stable_order(processes, |p| p.burst_time);
        run_in_order(self.name(), processes, &order, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(trace: &[ExecutionSlice]) -> Vec<u32> {
        trace.iter().map(|s| s.process_id).collect()
    }

    #[test]
    fn test_sjf_orders_by_burst() {
        let batch = vec![
            Process::new(1, 6),
            Process::new(2, 8),
            Process::new(3, 7),
            Process::new(4, 3),
        ];
        let trace = Sjf.dispatch(&batch);
        assert_eq!(ids(&trace), vec![4, 1, 3, 2]);
        let starts: Vec<i64> = trace.iter().map(|s| s.start_time).collect();
        assert_eq!(starts, vec![0, 3, 9, 16]);
    }

    #[test]
    fn test_sjf_ties_keep_input_order() {
        let batch = vec![Process::new(9, 2), Process::new(3, 2), Process::new(5, 1)];
        assert_eq!(ids(&Sjf.dispatch(&batch)), vec![5, 9, 3]);
    }

    #[test]
    fn test_sjf_ignores_arrival() {
        let batch = vec![
            Process::new(1, 5).with_arrival_time(0),
            Process::new(2, 1).with_arrival_time(100),
        ];
        let trace = Sjf.dispatch(&batch);
        assert_eq!(ids(&trace), vec![2, 1]);
        assert_eq!(trace[0].start_time, 0);
        assert!(!Sjf.honors_arrival());
    }
}
