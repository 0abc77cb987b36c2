//! Simulation output model.
//!
//! Every policy produces a [`SimulationResult`]: the timeline plus one
//! [`ProcessResult`] per input process. The KPI layer and the comparison
//! driver only depend on this contract.

use serde::{Deserialize, Serialize};

use super::{QueueLevel, Time, TimelineBlock};

/// Policy-specific input echoed back into a [`ProcessResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PolicyAttribute {
    /// Priority used by Priority scheduling.
    Priority(i32),
    /// Queue used by Multilevel Queue scheduling.
    QueueLevel(QueueLevel),
}

/// Per-process outcome of a simulation.
///
/// # Invariants (valid input, all work done)
/// - `turnaround_time = finish_time - arrival`
/// - `waiting_time = turnaround_time - burst >= 0`
/// - `response_time = first run start - arrival >= 0`
///
/// `response_time <= waiting_time` does not hold in general under
/// preemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival: Time,
    /// Burst time.
    pub burst: Time,
    /// Echoed priority or queue level, when the policy uses one.
    pub attribute: Option<PolicyAttribute>,
    /// Completion time.
    pub finish_time: Time,
    /// Time spent ready but not running.
    pub waiting_time: Time,
    /// Time from arrival to completion.
    pub turnaround_time: Time,
    /// Time from arrival to first execution.
    pub response_time: Time,
}

/// Complete output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Gapless block sequence covering `[0, total_time)`.
    pub timeline: Vec<TimelineBlock>,
    /// One entry per input process, in input order.
    pub process_results: Vec<ProcessResult>,
    /// End of the last block.
    pub total_time: Time,
    /// Context switches as counted by the producing policy.
    pub context_switches: u32,
}

impl SimulationResult {
    /// Zero-valued result (empty input).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of processes in the result.
    pub fn process_count(&self) -> usize {
        self.process_results.len()
    }

    /// Sum of execution block durations.
    pub fn busy_time(&self) -> Time {
        self.timeline
            .iter()
            .filter(|b| !b.is_idle())
            .map(TimelineBlock::duration)
            .sum()
    }

    /// Finds the result row for a process.
    pub fn result_for(&self, pid: &str) -> Option<&ProcessResult> {
        self.process_results.iter().find(|r| r.pid == pid)
    }

    /// All execution blocks of one process, in time order.
    pub fn blocks_for(&self, pid: &str) -> Vec<&TimelineBlock> {
        self.timeline
            .iter()
            .filter(|b| b.pid() == Some(pid))
            .collect()
    }

    /// Whether the timeline starts at 0, has no gaps or overlaps, contains
    /// no empty blocks and ends at `total_time`.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for block in &self.timeline {
            if block.start() != cursor || block.end() <= block.start() {
                return false;
            }
            cursor = block.end();
        }
        cursor == self.total_time
    }
}
