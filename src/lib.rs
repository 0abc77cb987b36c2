//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Turns a static set of processes into an execution timeline plus
//! per-process timing statistics under six classic policies, and reduces
//! the results to comparable performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `QueueLevel`, `TimelineBlock`,
//!   `ProcessResult`, `SimulationResult`
//! - **`simulation`**: Shared stepping primitives (working set, timeline
//!   recorder, step guard)
//! - **`dispatching`**: Selection rules that pick the next ready process
//! - **`scheduler`**: The six policies (FCFS, SJF, SRTF, RR, Priority, MLQ)
//!   and KPI evaluation
//! - **`comparison`**: Runs every policy on one input and ranks them
//! - **`config`**: Simulation parameters (time quantum, preemption, step limit)
//! - **`validation`**: Input integrity checks (duplicate pids, bad bursts)
//! - **`generator`**: Random workloads for demos and randomized testing
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::scheduler::{self, SimulationKpi};
//!
//! let procs = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
//! let result = scheduler::srtf(&procs);
//! assert_eq!(result.total_time, 12);
//!
//! let kpi = SimulationKpi::calculate(&result);
//! assert!((kpi.avg_waiting_time - 2.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod config;
pub mod dispatching;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
