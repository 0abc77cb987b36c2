//! First-Come First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival.
//! 2. If the CPU is free before the next arrival, idle until it.
//! 3. Run each process to completion in that order.
//!
//! Suffers from the convoy effect when a long burst arrives first.

use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::dispatching::{rules::FirstArrival, SelectionRule};
use crate::models::{Process, SimulationResult};
use crate::simulation::TimelineRecorder;

/// Non-preemptive arrival-order scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| FirstArrival.key(&processes[i], processes[i].burst));

        let mut recorder = TimelineRecorder::new(processes);
        for i in order {
            recorder.idle_until(processes[i].arrival);
            recorder.execute(i, processes[i].burst);
        }

        let result = recorder.finish(|_| None);
        log_summary(self.algorithm(), &result);
        result
    }
}
