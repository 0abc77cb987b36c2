//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! 1. Among arrived processes with work left, pick the smallest remaining
//!    time (ties: earliest arrival, then input order).
//! 2. Run it until the next arrival of any unfinished process or its own
//!    completion, whichever is first.
//! 3. Re-decide. A process may therefore produce several blocks.
//!
//! # Context switches
//! One per emitted block, plus one more for every segment that ends with
//! work remaining. This makes SRTF counts larger than the plain
//! one-per-block rule used by every other policy, including preemptive
//! Priority.

use super::runner::{run_until_next_event, SwitchAccounting};
use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::dispatching::rules::ShortestRemaining;
use crate::models::{Process, SimulationResult};
use crate::simulation::{StepGuard, DEFAULT_STEP_LIMIT};

/// Preemptive shortest-remaining-time scheduling.
#[derive(Debug, Clone, Copy)]
pub struct Srtf {
    step_limit: usize,
}

impl Srtf {
    /// Creates the policy with the default step limit.
    pub fn new() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Sets the non-termination guard limit.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Srtf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let result = run_until_next_event(
            processes,
            &ShortestRemaining,
            SwitchAccounting::PerBlockAndPreemption,
            StepGuard::new("srtf", self.step_limit),
            |_| None,
        );
        log_summary(self.algorithm(), &result);
        result
    }
}
