//! Priority scheduling.
//!
//! Lower `priority` value = dispatched first; ties go to the earlier
//! arrival, then input order.
//!
//! - **Non-preemptive**: same loop as SJF with a `(priority, arrival)` key.
//! - **Preemptive**: same loop as SRTF with a `(priority, arrival)` key.
//!   Priorities never change, so a switch only happens at the arrival of
//!   a more urgent process. Context switches are counted once per block,
//!   without SRTF's extra preemption increment.
//!
//! No aging: low-priority processes can starve.

use super::runner::{run_to_completion, run_until_next_event, SwitchAccounting};
use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::dispatching::rules::PriorityThenArrival;
use crate::models::{PolicyAttribute, Process, SimulationResult};
use crate::simulation::{StepGuard, DEFAULT_STEP_LIMIT};

/// Priority scheduling, preemptive or not.
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduling {
    preemptive: bool,
    step_limit: usize,
}

impl PriorityScheduling {
    /// Creates the policy.
    pub fn new(preemptive: bool) -> Self {
        Self {
            preemptive,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Sets the non-termination guard limit.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Whether arrivals may preempt the running process.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Default for PriorityScheduling {
    fn default() -> Self {
        Self::new(false)
    }
}

fn echo_priority(process: &Process) -> Option<PolicyAttribute> {
    Some(PolicyAttribute::Priority(process.priority))
}

impl SchedulingPolicy for PriorityScheduling {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let guard = StepGuard::new("priority", self.step_limit);
        let result = if self.preemptive {
            run_until_next_event(
                processes,
                &PriorityThenArrival,
                SwitchAccounting::PerBlock,
                guard,
                echo_priority,
            )
        } else {
            run_to_completion(processes, &PriorityThenArrival, guard, echo_priority)
        };
        log_summary(self.algorithm(), &result);
        result
    }
}
