//! Offline CPU-scheduling calculator.
//!
//! Computes per-process waiting, turnaround and completion times for a
//! batch of processes under a classical CPU-scheduling discipline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSlice`,
//!   `ProcessMetrics`, `ScheduleResult`
//! - **`validation`**: Input integrity checks (empty batch, bursts, duplicate IDs)
//! - **`disciplines`**: FCFS, SJF, Priority and Round-Robin strategies
//! - **`scheduler`**: Validation → dispatch → metrics pipeline, batch averages
//! - **`report`**: Tabular and Gantt rendering
//! - **`generator`**: Random valid batches
//!
//! # Example
//!
//! ```
//! use u_cpusched::disciplines::Discipline;
//! use u_cpusched::models::Process;
//! use u_cpusched::report::Report;
//! use u_cpusched::scheduler::Scheduler;
//!
//! let batch = vec![Process::new(1, 6), Process::new(2, 8), Process::new(3, 7), Process::new(4, 3)];
//! let result = Scheduler::new().schedule(&batch, Discipline::Sjf).unwrap();
//! assert_eq!(result.dispatch_order(), vec![4, 1, 3, 2]);
//! println!("{}", Report::new(&result));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod disciplines;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
