//! Scheduler entry point.
//!
//! # Pipeline
//!
//! 1. Validate the batch and the discipline parameters.
//! 2. Build the discipline strategy and dispatch the batch into a trace.
//! 3. Derive per-process metrics and the batch summary from the trace.
//!
//! Nothing is computed when validation fails, and no partial schedule is
//! ever returned.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::summary::{derive_metrics, ScheduleSummary};
use crate::disciplines::Discipline;
use crate::models::{Process, ScheduleResult};
use crate::validation::{validate_batch, ValidationError, ValidationErrorKind};

/// Input container for scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Discipline to apply.
    #[serde(default)]
    pub discipline: Discipline,
    /// Processes in submission order.
    pub processes: Vec<Process>,
}

impl ScheduleRequest {
    /// Creates a request using the default discipline (FCFS).
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            discipline: Discipline::default(),
            processes,
        }
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }
}

/// Scheduling failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError {
    /// Every problem found in the input.
    pub errors: Vec<ValidationError>,
}

impl ScheduleError {
    /// Whether any error has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scheduling input: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Offline batch scheduler.
///
/// Stateless; each call is an independent pure computation, so one
/// scheduler may serve any number of batches from any number of threads.
///
/// # Example
///
/// ```
/// use u_cpusched::disciplines::Discipline;
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::Scheduler;
///
/// let batch = vec![Process::new(1, 24), Process::new(2, 3), Process::new(3, 3)];
/// let result = Scheduler::new()
///     .schedule(&batch, Discipline::RoundRobin { quantum: 4 })
///     .unwrap();
///
/// assert_eq!(result.metrics_for(1).unwrap().completion_time, 30);
/// assert!((result.summary.average_waiting_time - 17.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules a batch under one discipline.
    pub fn schedule(
        &self,
        processes: &[Process],
        discipline: Discipline,
    ) -> Result<ScheduleResult, ScheduleError> {
        let mut errors = match validate_batch(processes) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if let Err(e) = discipline.validate() {
            errors.push(e);
        }
        if !errors.is_empty() {
            log::warn!(
                "[{}] rejected batch of {} processes: {} error(s)",
                discipline.name(),
                processes.len(),
                errors.len()
            );
            return Err(errors.into());
        }

        let strategy = discipline.strategy().map_err(|e| ScheduleError::from(vec![e]))?;
        let trace = strategy.dispatch(processes);
        let metrics = derive_metrics(processes, &trace, strategy.honors_arrival());
        let summary = ScheduleSummary::calculate(&metrics, &trace);

        log::info!(
            "[{}] scheduled {} processes in {} slices, makespan {}",
            discipline,
            metrics.len(),
            trace.len(),
            summary.makespan
        );

        Ok(ScheduleResult {
            discipline,
            trace,
            metrics,
            summary,
        })
    }

    /// Schedules from a request.
    pub fn run(&self, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
        self.schedule(&request.processes, request.discipline)
    }

    /// Schedules the same batch under all four disciplines.
    ///
    /// Results are in the order FCFS, SJF, Priority, RR.
    pub fn compare(
        &self,
        processes: &[Process],
        quantum: i64,
    ) -> Result<Vec<ScheduleResult>, ScheduleError> {
        Discipline::all(quantum)
            .into_iter()
            .map(|d| self.schedule(processes, d))
            .collect()
    }
}
