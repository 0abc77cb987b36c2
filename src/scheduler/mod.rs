//! CPU scheduling policies and KPI evaluation.
//!
//! Six independent, pure policies share one output contract
//! ([`SimulationResult`]):
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival |
//! | [`Sjf`] | no | burst |
//! | [`Srtf`] | yes | remaining time, arrival |
//! | [`RoundRobin`] | yes | FIFO, time quantum |
//! | [`PriorityScheduling`] | optional | priority, arrival |
//! | [`MultilevelQueue`] | mixed | queue level, then RR/FCFS |
//!
//! Every call builds its own working state and drops it on return, so
//! calls can run in any order or in parallel.
//!
//! # KPI
//!
//! [`SimulationKpi`] reduces any result to averages, CPU utilization,
//! throughput and context switches.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod algorithm;
mod fcfs;
mod kpi;
mod multilevel;
mod priority;
mod round_robin;
mod runner;
mod sjf;
mod srtf;

pub use algorithm::{Algorithm, ParseAlgorithmError, Preemption};
pub use fcfs::Fcfs;
pub use kpi::{context_switches_from_timeline, SimulationKpi};
pub use multilevel::MultilevelQueue;
pub use priority::PriorityScheduling;
pub use round_robin::{RoundRobin, DEFAULT_TIME_QUANTUM};
pub use runner::SwitchAccounting;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;

use tracing::debug;

use crate::models::{Process, SimulationResult, Time};

/// A CPU scheduling policy.
///
/// `simulate` is pure: identical input always yields an identical result
/// and nothing outlives the call. Empty input yields
/// [`SimulationResult::empty`].
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Which algorithm this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Runs the policy over `processes`.
    fn simulate(&self, processes: &[Process]) -> SimulationResult;
}

/// First-Come First-Served.
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    Fcfs.simulate(processes)
}

/// Shortest Job First (non-preemptive).
pub fn sjf(processes: &[Process]) -> SimulationResult {
    Sjf::new().simulate(processes)
}

/// Shortest Remaining Time First.
pub fn srtf(processes: &[Process]) -> SimulationResult {
    Srtf::new().simulate(processes)
}

/// Round Robin with the given time quantum.
pub fn round_robin(processes: &[Process], time_quantum: Time) -> SimulationResult {
    RoundRobin::new(time_quantum).simulate(processes)
}

/// Priority scheduling, optionally preemptive.
pub fn priority(processes: &[Process], preemptive: bool) -> SimulationResult {
    PriorityScheduling::new(preemptive).simulate(processes)
}

/// Fixed three-level Multilevel Queue.
pub fn multilevel_queue(processes: &[Process]) -> SimulationResult {
    MultilevelQueue::new().simulate(processes)
}

fn log_summary(algorithm: Algorithm, result: &SimulationResult) {
    debug!(
        algorithm = algorithm.id(),
        process_count = result.process_count(),
        blocks = result.timeline.len(),
        total_time = result.total_time,
        context_switches = result.context_switches,
        "simulation complete"
    );
}
