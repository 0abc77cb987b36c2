//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! At every decision point, among the arrived, unscheduled processes pick
//! the smallest burst and run it to completion. Idle until the earliest
//! remaining arrival if nothing has arrived.
//!
//! Equal bursts fall back to input order, not arrival.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::runner::run_to_completion;
use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::dispatching::rules::ShortestBurst;
use crate::models::{Process, SimulationResult};
use crate::simulation::{StepGuard, DEFAULT_STEP_LIMIT};

/// Non-preemptive shortest-burst scheduling.
#[derive(Debug, Clone, Copy)]
pub struct Sjf {
    step_limit: usize,
}

impl Sjf {
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

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let guard = StepGuard::new("sjf", self.step_limit);
        let result = run_to_completion(processes, &ShortestBurst, guard, |_| None);
        log_summary(self.algorithm(), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineBlock;

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let procs = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 2, 4),
            Process::new("P3", 4, 1),
            Process::new("P4", 5, 4),
        ];
        let result = Sjf::new().simulate(&procs);

        assert_eq!(
            result.timeline,
            vec![
                TimelineBlock::execution("P1", 0, 7),
                TimelineBlock::execution("P3", 7, 8),
                TimelineBlock::execution("P2", 8, 12),
                TimelineBlock::execution("P4", 12, 16),
            ]
        );
        assert_eq!(result.result_for("P3").unwrap().waiting_time, 3);
        assert_eq!(result.result_for("P4").unwrap().waiting_time, 7);
        assert_eq!(result.context_switches, 4);
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        let procs = vec![Process::new("long", 0, 10), Process::new("short", 1, 1)];
        let result = Sjf::new().simulate(&procs);
        assert_eq!(result.timeline[0], TimelineBlock::execution("long", 0, 10));
        assert_eq!(result.timeline[1], TimelineBlock::execution("short", 10, 11));
    }

    #[test]
    fn test_sjf_idle_gap() {
        let procs = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 3)];
        let result = Sjf::new().simulate(&procs);

        assert_eq!(result.timeline[1], TimelineBlock::idle(2, 6));
        assert_eq!(result.total_time, 9);
        assert_eq!(result.context_switches, 3);
    }

    #[test]
    fn test_sjf_tie_uses_input_order() {
        let procs = vec![Process::new("later", 1, 3), Process::new("earlier", 0, 3)];
        let result = Sjf::new().simulate(&procs);
        // Only "earlier" has arrived at t=0; at t=3 "later" is the only one left.
        assert_eq!(result.timeline[0].pid(), Some("earlier"));

        let procs = vec![
            Process::new("first", 0, 1),
            Process::new("b", 1, 3),
            Process::new("a", 0, 3),
        ];
        let result = Sjf::new().simulate(&procs);
        // At t=1 "b" and "a" tie on burst; input order picks "b".
        assert_eq!(result.timeline[1].pid(), Some("b"));
    }

    #[test]
    fn test_sjf_step_limit_stops_early() {
        let procs = vec![Process::new("P1", 0, 2), Process::new("P2", 0, 1)];
        let result = Sjf::new().with_step_limit(1).simulate(&procs);
        assert_eq!(result.timeline, vec![TimelineBlock::execution("P2", 0, 1)]);
        assert_eq!(result.result_for("P1").unwrap().finish_time, 0);
    }

    #[test]
    fn test_sjf_empty() {
        assert_eq!(Sjf::new().simulate(&[]), SimulationResult::empty());
    }
}
