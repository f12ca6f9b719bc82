//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Enqueue every process in input order (all ready at t=0).
//! 2. Dequeue the front process and run it for `min(remaining, quantum)`.
//! 3. Charge the time since its last slice ended as waiting time.
//! 4. Completed processes leave the queue; the rest re-enter at the back.
//!
//! A process that is preempted earlier re-enters the queue earlier, which
//! fixes the order between processes that become ready at the same time.
//!
//! # Complexity
//! O(sum(ceil(burst_i / quantum))) slices.

use std::collections::VecDeque;

use super::SchedulingDiscipline;
use crate::models::{ExecutionSlice, Process};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Round-Robin (preemptive, fixed quantum).
///
/// # Example
/// ```
/// use u_cpusched::disciplines::RoundRobin;
/// use u_cpusched::models::Process;
///
/// let rr = RoundRobin::new(4).unwrap();
/// let run = rr.simulate(&[Process::new(1, 24), Process::new(2, 3), Process::new(3, 3)]);
/// assert_eq!(run.completion_times, vec![30, 7, 10]);
/// assert_eq!(run.waiting_times, vec![6, 4, 7]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

/// Full bookkeeping of one round-robin simulation.
///
/// `completion_times` and `waiting_times` are indexed like the input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRobinRun {
    /// Slices in dispatch order.
    pub trace: Vec<ExecutionSlice>,
    /// Completion time per input process.
    pub completion_times: Vec<i64>,
    /// Accumulated ready-queue waiting time per input process.
    pub waiting_times: Vec<i64>,
}

impl RoundRobin {
    /// Creates a round-robin discipline.
    ///
    /// Fails with [`ValidationErrorKind::InvalidParameter`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        if quantum <= 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidParameter,
                format!("Round-robin quantum must be positive, got {quantum}"),
            ));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs the ready-queue simulation.
    ///
    /// Non-positive bursts would never leave the queue cleanly, so callers
    /// must validate the batch first; such processes are dropped here
    /// without emitting a slice.
    pub fn simulate(&self, processes: &[Process]) -> RoundRobinRun {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut last_scheduled = vec![0i64; n];
        let mut waiting_times = vec![0i64; n];
        let mut completion_times = vec![0i64; n];
        let mut trace = Vec::new();

        let mut ready: VecDeque<usize> = (0..n).filter(|&i| remaining[i] > 0).collect();
        let mut current_time: i64 = 0;

        while let Some(i) = ready.pop_front() {
            waiting_times[i] += current_time - last_scheduled[i];

            let run = remaining[i].min(self.quantum);
            log::debug!(
                "[RR] t={current_time} P{} runs for {run} ({} left)",
                processes[i].id,
                remaining[i] - run
            );
            trace.push(ExecutionSlice::new(processes[i].id, current_time, run));

            current_time += run;
            remaining[i] -= run;
            last_scheduled[i] = current_time;

            if remaining[i] == 0 {
                completion_times[i] = current_time;
            } else {
                ready.push_back(i);
            }
        }

        RoundRobinRun {
            trace,
            completion_times,
            waiting_times,
        }
    }
}

impl SchedulingDiscipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn dispatch(&self, processes: &[Process]) -> Vec<ExecutionSlice> {
        self.simulate(processes).trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(bursts: &[i64]) -> Vec<Process> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Process::new(i as u32 + 1, b))
            .collect()
    }

    #[test]
    fn test_rr_classic_example() {
        let rr = RoundRobin::new(4).unwrap();
        let run = rr.simulate(&batch(&[24, 3, 3]));

        assert_eq!(run.completion_times, vec![30, 7, 10]);
        assert_eq!(run.waiting_times, vec![6, 4, 7]);

        let order: Vec<u32> = run.trace.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 3, 1, 1, 1, 1, 1]);
        assert_eq!(run.trace[3].start_time, 10);
    }

    #[test]
    fn test_rr_fifo_reinsertion() {
        // q=2: P1(0-2) P2(2-4) P3(4-5 done) P1(5-7) P2(7-8 done) P1(8-9 done)
        let rr = RoundRobin::new(2).unwrap();
        let run = rr.simulate(&batch(&[5, 3, 1]));
        let order: Vec<u32> = run.trace.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 3, 1, 2, 1]);
        assert_eq!(run.completion_times, vec![9, 8, 5]);
        assert_eq!(run.waiting_times, vec![4, 5, 4]);
    }

    #[test]
    fn test_rr_large_quantum_degenerates_to_fcfs() {
        let rr = RoundRobin::new(1_000).unwrap();
        let run = rr.simulate(&batch(&[5, 2, 7]));
        assert_eq!(run.trace.len(), 3);
        assert_eq!(run.completion_times, vec![5, 7, 14]);
        assert_eq!(run.waiting_times, vec![0, 5, 7]);
    }

    #[test]
    fn test_rr_quantum_one() {
        let rr = RoundRobin::new(1).unwrap();
        let run = rr.simulate(&batch(&[3, 3]));
        assert_eq!(run.trace.len(), 6);
        assert_eq!(run.completion_times, vec![5, 6]);
    }

    #[test]
    fn test_rr_waiting_matches_completion_minus_burst() {
        let processes = batch(&[8, 1, 13, 4, 6]);
        let rr = RoundRobin::new(3).unwrap();
        let run = rr.simulate(&processes);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(run.waiting_times[i], run.completion_times[i] - p.burst_time);
        }
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        assert_eq!(
            RoundRobin::new(0).unwrap_err().kind,
            ValidationErrorKind::InvalidParameter
        );
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::new(5).unwrap().quantum(), 5);
    }

    #[test]
    fn test_rr_ignores_arrival() {
        let rr = RoundRobin::new(2).unwrap();
        let processes = vec![Process::new(1, 2).with_arrival_time(50), Process::new(2, 2)];
        let trace = rr.dispatch(&processes);
        assert_eq!(trace[0].process_id, 1);
        assert_eq!(trace[0].start_time, 0);
    }
}
