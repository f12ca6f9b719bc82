//! Tabular schedule reports.
//!
//! Columns depend on the discipline:
//!
//! | Discipline | Columns |
//! |------------|---------|
//! | FCFS | Process, AT, BT, WT, TAT |
//! | SJF, RR | Process, BT, WT, TAT |
//! | Priority | Process, BT, Priority, WT, TAT |
//!
//! Averages are rendered with two decimals.

use std::fmt;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::disciplines::Discipline;
use crate::models::{ExecutionSlice, ScheduleResult};

/// Renders one schedule result.
///
/// `Display` writes the table, the Gantt line and the summary lines.
///
/// # Example
/// ```
/// use u_cpusched::disciplines::Discipline;
/// use u_cpusched::models::Process;
/// use u_cpusched::report::Report;
/// use u_cpusched::scheduler::Scheduler;
///
/// let batch = vec![Process::new(1, 6), Process::new(2, 8), Process::new(3, 7), Process::new(4, 3)];
/// let result = Scheduler::new().schedule(&batch, Discipline::Sjf).unwrap();
/// let text = Report::new(&result).render_summary();
/// assert!(text.contains("Average Waiting Time: 7.00"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a ScheduleResult,
}

impl<'a> Report<'a> {
    /// Creates a report for a result.
    pub fn new(result: &'a ScheduleResult) -> Self {
        Self { result }
    }

    /// Column headers for the result's discipline.
    pub fn headers(&self) -> Vec<&'static str> {
        match self.result.discipline {
            Discipline::Fcfs => vec!["Process", "AT", "BT", "WT", "TAT"],
            Discipline::Priority => vec!["Process", "BT", "Priority", "WT", "TAT"],
            Discipline::Sjf | Discipline::RoundRobin { .. } => vec!["Process", "BT", "WT", "TAT"],
        }
    }

    /// Per-process rows in dispatch order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let discipline = self.result.discipline;
        self.result
            .metrics
            .iter()
            .map(|m| {
                let mut row = vec![m.process.label()];
                if discipline == Discipline::Fcfs {
                    row.push(m.process.arrival_time.to_string());
                }
                row.push(m.process.burst_time.to_string());
                if discipline == Discipline::Priority {
                    row.push(m.process.priority.to_string());
                }
                row.push(m.waiting_time.to_string());
                row.push(m.turnaround_time.to_string());
                row
            })
            .collect()
    }

    /// Process table.
    pub fn render_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers());
        for row in self.rows() {
            builder.push_record(row);
        }
        let mut table = builder.build();
        table.with(Style::psql());
        table.to_string()
    }

    /// Gantt chart of the trace on one line, e.g. `| P1 | P2 |` over `0  4  7`.
    pub fn render_gantt(&self) -> String {
        gantt(&self.result.trace)
    }

    /// Average waiting and turnaround lines.
    pub fn render_summary(&self) -> String {
        let s = &self.result.summary;
        format!(
            "Average Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}",
            s.average_waiting_time, s.average_turnaround_time
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.result.discipline)?;
        writeln!(f, "{}", self.render_table())?;
        writeln!(f)?;
        writeln!(f, "{}", self.render_gantt())?;
        writeln!(f)?;
        writeln!(f, "{}", self.render_summary())
    }
}

/// Side-by-side averages for several disciplines over the same batch.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'a> {
    results: &'a [ScheduleResult],
}

impl<'a> ComparisonReport<'a> {
    /// Creates a comparison over `results`.
    pub fn new(results: &'a [ScheduleResult]) -> Self {
        Self { results }
    }

    /// Comparison table: one row per discipline.
    pub fn render_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Discipline", "Avg WT", "Avg TAT", "Avg RT", "Makespan", "Switches"]);
        for r in self.results {
            let s = &r.summary;
            builder.push_record([
                r.discipline.to_string(),
                format!("{:.2}", s.average_waiting_time),
                format!("{:.2}", s.average_turnaround_time),
                format!("{:.2}", s.average_response_time),
                s.makespan.to_string(),
                s.context_switches.to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::psql());
        table.to_string()
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.render_table())
    }
}

/// Renders slices as a bar line over a time-axis line.
///
/// Idle gaps between slices are shown as `--`.
fn gantt(trace: &[ExecutionSlice]) -> String {
    let mut bar = String::from("|");
    let mut axis = String::new();
    let mut clock: Option<i64> = None;

    for slice in trace {
        if let Some(t) = clock {
            if slice.start_time > t {
                let cell = " -- ";
                axis.push_str(&format!("{:<width$}", t, width = cell.len() + 1));
                bar.push_str(cell);
                bar.push('|');
            }
        }
        let cell = format!(" P{} ", slice.process_id);
        axis.push_str(&format!("{:<width$}", slice.start_time, width = cell.len() + 1));
        bar.push_str(&cell);
        bar.push('|');
        clock = Some(slice.end_time());
    }

    if let Some(t) = clock {
        axis.push_str(&t.to_string());
    }
    format!("{bar}\n{axis}")
}
