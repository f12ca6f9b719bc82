//! Static-priority scheduling (non-preemptive).
//!
//! Same accounting as SJF, keyed on `priority` instead of burst time.
//! Lower values run sooner. No aging.

use super::{run_in_order, stable_order, SchedulingDiscipline};
use crate::models::{ExecutionSlice, Process};

/// Static priority. Equal priorities keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingDiscipline for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn dispatch(&self, processes: &[Process]) -> Vec<ExecutionSlice> {
        let order = stable_order(processes, |p| p.priority);
        run_in_order(self.name(), processes, &order, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        let batch = vec![
            Process::new(1, 10).with_priority(3),
            Process::new(2, 1).with_priority(1),
            Process::new(3, 2).with_priority(4),
            Process::new(4, 1).with_priority(5),
            Process::new(5, 5).with_priority(2),
        ];
        let trace = Priority.dispatch(&batch);
        let order: Vec<u32> = trace.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![2, 5, 1, 3, 4]);
        let starts: Vec<i64> = trace.iter().map(|s| s.start_time).collect();
        assert_eq!(starts, vec![0, 1, 6, 16, 18]);
    }

    #[test]
    fn test_negative_priority_runs_first() {
        let batch = vec![
            Process::new(1, 3).with_priority(0),
            Process::new(2, 3).with_priority(-2),
        ];
        assert_eq!(Priority.dispatch(&batch)[0].process_id, 2);
    }

    #[test]
    fn test_priority_ties_keep_input_order() {
        let batch = vec![
            Process::new(4, 3).with_priority(1),
            Process::new(2, 1).with_priority(1),
        ];
        let trace = Priority.dispatch(&batch);
        assert_eq!(trace[0].process_id, 4);
        assert_eq!(trace[1].process_id, 2);
    }
}
