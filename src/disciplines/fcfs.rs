//! First-Come-First-Served.
//!
//! Processes run to completion in order of arrival. When the next process
//! has not arrived yet, the CPU idles until it does.

use super::{run_in_order, stable_order, SchedulingDiscipline};
use crate::models::{ExecutionSlice, Process};

/// First-Come-First-Served (non-preemptive, arrival-ordered).
///
/// Equal arrival times keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingDiscipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn honors_arrival(&self) -> bool {
        true
    }

    fn dispatch(&self, processes: &[Process]) -> Vec<ExecutionSlice> {
        let order = stable_order(processes, |p| p.arrival_time);
        run_in_order(self.name(), processes, &order, true)
    }
}
