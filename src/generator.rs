//! Random workload generation.
//!
//! Produces valid process sets (unique pids, `arrival >= 0`, `burst >= 1`)
//! for demonstrations and randomized testing. Pass a seeded RNG for
//! reproducible workloads.
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpu_sched::generator::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let procs = WorkloadGenerator::new(5).generate(&mut rng);
//! assert_eq!(procs.len(), 5);
//! assert_eq!(procs[0].pid, "P1");
//! ```

use rand::Rng;

use crate::models::{Process, QueueLevel, Time};

/// Parameters for random process sets.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: Time,
    burst_range: (Time, Time),
    priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Generator for `count` processes with arrivals in 0..=10, bursts in
    /// 1..=8 and priorities in 0..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 8),
            priority_range: (0, 5),
        }
    }

    /// Sets the latest possible arrival. Negative values mean 0.
    pub fn with_max_arrival(mut self, max_arrival: Time) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range. Bounds are ordered and raised to 1.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.burst_range = (min.min(max).max(1), min.max(max).max(1));
        self
    }

    /// Sets the inclusive priority range. Bounds are ordered.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min.min(max), min.max(max));
        self
    }

    /// Draws a process set named `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|n| {
                let level = QueueLevel::ALL[rng.random_range(0..QueueLevel::ALL.len())];
                Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.burst_range.0..=self.burst_range.1),
                )
                .with_priority(rng.random_range(self.priority_range.0..=self.priority_range.1))
                .with_queue_level(level)
            })
            .collect()
    }
}
