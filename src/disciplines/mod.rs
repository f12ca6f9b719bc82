//! CPU-scheduling disciplines.
//!
//! Each discipline turns a batch into an ordered execution trace. Metrics
//! are derived from the trace afterwards by the scheduler, so a discipline
//! only decides *who runs when*.
//!
//! | Discipline | Preemptive | Order key | Uses arrival |
//! |------------|-----------|-----------|--------------|
//! | FCFS | no | arrival time | yes |
//! | SJF | no | burst time | no |
//! | Priority | no | priority (lower first) | no |
//! | Round-Robin | yes (quantum) | FIFO ready queue | no |
//!
//! All ordering disciplines use a stable sort, so ties keep input order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::disciplines::{Discipline, SchedulingDiscipline, Sjf};
//! use u_cpusched::models::Process;
//!
//! let batch = vec![Process::new(1, 6), Process::new(2, 3)];
//! let trace = Sjf.dispatch(&batch);
//! assert_eq!(trace[0].process_id, 2);
//!
//! let rr = Discipline::RoundRobin { quantum: 4 }.strategy().unwrap();
//! assert_eq!(rr.name(), "RR");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::{RoundRobin, RoundRobinRun};
pub use sjf::Sjf;

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionSlice, Process};
use crate::validation::ValidationError;

/// A scheduling discipline that produces an execution trace.
///
/// Implementations assume the batch has already passed
/// [`validate_batch`](crate::validation::validate_batch).
pub trait SchedulingDiscipline: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Whether waiting time is measured from each process's arrival time.
    ///
    /// Disciplines returning `false` treat every process as ready at t=0.
    fn honors_arrival(&self) -> bool {
        false
    }

    /// Produces the CPU slices for the batch, in time order.
    fn dispatch(&self, processes: &[Process]) -> Vec<ExecutionSlice>;
}

/// Serializable discipline selector.
///
/// This is the configuration-facing form; [`Discipline::strategy`] builds
/// the matching [`SchedulingDiscipline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Static priority (non-preemptive).
    Priority,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice length (ticks).
        quantum: i64,
    },
}

impl Discipline {
    /// All four disciplines, using `quantum` for Round-Robin.
    pub fn all(quantum: i64) -> [Discipline; 4] {
        [
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Priority,
            Discipline::RoundRobin { quantum },
        ]
    }

    /// Short name of the discipline.
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "Priority",
            Discipline::RoundRobin { .. } => "RR",
        }
    }

    /// Checks discipline parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Discipline::RoundRobin { quantum } => RoundRobin::new(quantum).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Builds the strategy for this discipline.
    pub fn strategy(&self) -> Result<Box<dyn SchedulingDiscipline>, ValidationError> {
        let strategy: Box<dyn SchedulingDiscipline> = match *self {
            Discipline::Fcfs => Box::new(Fcfs),
            Discipline::Sjf => Box::new(Sjf),
            Discipline::Priority => Box::new(Priority),
            Discipline::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
        };
        Ok(strategy)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::RoundRobin { quantum } => write!(f, "RR (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Runs processes to completion one after another in `order`.
///
/// With `honor_arrival`, the clock jumps forward to a process's arrival
/// when the CPU would otherwise start it early (idle gap).
pub(crate) fn run_in_order(
    name: &str,
    processes: &[Process],
    order: &[usize],
    honor_arrival: bool,
) -> Vec<ExecutionSlice> {
    let mut trace = Vec::with_capacity(order.len());
    let mut current_time: i64 = 0;

    for &idx in order {
        let p = &processes[idx];
        if honor_arrival && current_time < p.arrival_time {
            current_time = p.arrival_time;
        }

        log::debug!(
            "[{name}] t={current_time} P{} runs for {}",
            p.id,
            p.burst_time
        );
        trace.push(ExecutionSlice::new(p.id, current_time, p.burst_time));
        current_time += p.burst_time;
    }

    trace
}

/// Input indices stably sorted by `key`.
pub(crate) fn stable_order<K: Ord>(
    processes: &[Process],
    key: impl Fn(&Process) -> K,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| key(&processes[i]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_discipline_names() {
        let names: Vec<&str> = Discipline::all(4).iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Priority", "RR"]);
        assert_eq!(Discipline::RoundRobin { quantum: 2 }.to_string(), "RR (q=2)");
        assert_eq!(Discipline::Sjf.to_string(), "SJF");
    }

    #[test]
    fn test_default_is_fcfs() {
        assert_eq!(Discipline::default(), Discipline::Fcfs);
    }

    #[test]
    fn test_only_fcfs_honors_arrival() {
        for d in Discipline::all(3) {
            let strategy = d.strategy().unwrap();
            assert_eq!(strategy.honors_arrival(), d == Discipline::Fcfs);
            assert_eq!(strategy.name(), d.name());
        }
    }

    #[test]
    fn test_quantum_validation() {
        assert!(Discipline::RoundRobin { quantum: 1 }.validate().is_ok());
        let err = Discipline::RoundRobin { quantum: 0 }.validate().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidParameter);
        assert!(Discipline::RoundRobin { quantum: -5 }.strategy().is_err());
        assert!(Discipline::Priority.validate().is_ok());
    }

    #[test]
    fn test_discipline_serde_tags() {
        let rr: Discipline = serde_json::from_str(r#"{"kind":"round_robin","quantum":4}"#).unwrap();
        assert_eq!(rr, Discipline::RoundRobin { quantum: 4 });

        let sjf: Discipline = serde_json::from_str(r#"{"kind":"sjf"}"#).unwrap();
        assert_eq!(sjf, Discipline::Sjf);

        let json = serde_json::to_string(&Discipline::Priority).unwrap();
        assert_eq!(json, r#"{"kind":"priority"}"#);
    }

    #[test]
    fn test_run_in_order_idle_gap() {
        let batch = vec![Process::new(1, 2), Process::new(2, 3).with_arrival_time(5)];
        let trace = run_in_order("test", &batch, &[0, 1], true);
        assert_eq!(trace[1].start_time, 5);

        let trace = run_in_order("test", &batch, &[0, 1], false);
        assert_eq!(trace[1].start_time, 2);
    }

    #[test]
    fn test_stable_order_keeps_ties() {
        let batch = vec![Process::new(1, 5), Process::new(2, 1), Process::new(3, 5)];
        assert_eq!(stable_order(&batch, |p| p.burst_time), vec![1, 0, 2]);
    }
}
