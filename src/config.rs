//! Simulation parameters.
//!
//! One [`SimulationConfig`] drives every policy so a comparison runs all
//! six on identical parameters. Missing JSON fields take their defaults:
//!
//! ```
//! use u_cpu_sched::config::SimulationConfig;
//!
//! let config: SimulationConfig = serde_json::from_str(r#"{"time_quantum": 4}"#).unwrap();
//! assert_eq!(config.time_quantum, 4);
//! assert!(!config.priority_preemptive);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationResult, Time};
use crate::scheduler::{
    Algorithm, Fcfs, MultilevelQueue, PriorityScheduling, RoundRobin, SchedulingPolicy, Sjf, Srtf,
    DEFAULT_TIME_QUANTUM,
};
use crate::simulation::DEFAULT_STEP_LIMIT;

/// Caller-tunable parameters shared by all policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time quantum (>= 1).
    pub time_quantum: Time,
    /// Whether Priority scheduling preempts on arrival.
    pub priority_preemptive: bool,
    /// Iteration ceiling for every stepping loop.
    pub step_limit: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            priority_preemptive: false,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

impl SimulationConfig {
    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Sets Priority preemption.
    pub fn with_priority_preemptive(mut self, preemptive: bool) -> Self {
        self.priority_preemptive = preemptive;
        self
    }

    /// Sets the iteration ceiling.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Builds the policy for `algorithm` with these parameters.
    pub fn policy(&self, algorithm: Algorithm) -> Box<dyn SchedulingPolicy> {
        match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf::new().with_step_limit(self.step_limit)),
            Algorithm::Srtf => Box::new(Srtf::new().with_step_limit(self.step_limit)),
            Algorithm::RoundRobin => {
                Box::new(RoundRobin::new(self.time_quantum).with_step_limit(self.step_limit))
            }
            Algorithm::Priority => Box::new(
                PriorityScheduling::new(self.priority_preemptive)
                    .with_step_limit(self.step_limit),
            ),
            Algorithm::MultilevelQueue => {
                Box::new(MultilevelQueue::new().with_step_limit(self.step_limit))
            }
        }
    }

    /// Runs `algorithm` over `processes` with these parameters.
    pub fn simulate(&self, algorithm: Algorithm, processes: &[Process]) -> SimulationResult {
        self.policy(algorithm).simulate(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineBlock;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_quantum, 2);
        assert!(!config.priority_preemptive);
        assert_eq!(config.step_limit, DEFAULT_STEP_LIMIT);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::default()
            .with_time_quantum(3)
            .with_priority_preemptive(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_policy_matches_algorithm() {
        let config = SimulationConfig::default();
        for algo in Algorithm::ALL {
            assert_eq!(config.policy(algo).algorithm(), algo);
        }
    }

    #[test]
    fn test_parameters_reach_policies() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)];
        let rr = SimulationConfig::default()
            .with_time_quantum(5)
            .simulate(Algorithm::RoundRobin, &procs);
        assert_eq!(rr.timeline[0], TimelineBlock::execution("P1", 0, 5));

        let procs = vec![
            Process::new("lo", 0, 4).with_priority(5),
            Process::new("hi", 1, 1).with_priority(1),
        ];
        let preemptive = SimulationConfig::default()
            .with_priority_preemptive(true)
            .simulate(Algorithm::Priority, &procs);
        assert_eq!(preemptive.timeline[1], TimelineBlock::execution("hi", 1, 2));
    }

    #[test]
    fn test_step_limit_reaches_every_looping_policy() {
        let procs = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 0, 2),
            Process::new("P3", 0, 1),
        ];
        let config = SimulationConfig::default().with_step_limit(1);
        for algo in Algorithm::ALL {
            if algo == Algorithm::Fcfs {
                continue;
            }
            let result = config.simulate(algo, &procs);
            assert_eq!(result.timeline.len(), 1, "{algo} ignored the step limit");
        }
    }
}
