//! Multilevel Queue (fixed assignment, no feedback).
//!
//! # Structure
//!
//! | Queue | Discipline | Quantum |
//! |-------|-----------|---------|
//! | 0 (`System`) | Round Robin | 2 |
//! | 1 (`Interactive`) | Round Robin | 4 |
//! | 2 (`Batch`) | FCFS | unbounded |
//!
//! # Algorithm
//!
//! 1. Serve the first non-empty queue in order 0 → 2.
//! 2. While a slice runs, admit every arrival at its own time unit. If a
//!    higher queue becomes non-empty, the slice ends at that unit boundary
//!    and the interrupted process returns to the head of its own queue.
//! 3. A slice that uses its whole quantum sends the process to the tail.
//! 4. Idle until the next arrival when every queue is empty.
//!
//! Processes never migrate between queues, so lower queues can starve.

use std::collections::VecDeque;

use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::models::{PolicyAttribute, Process, QueueLevel, SimulationResult, Time};
use crate::simulation::{StepGuard, TimelineRecorder, WorkingSet, DEFAULT_STEP_LIMIT};

/// Three fixed-priority queues.
#[derive(Debug, Clone, Copy)]
pub struct MultilevelQueue {
    step_limit: usize,
}

impl MultilevelQueue {
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

impl Default for MultilevelQueue {
    fn default() -> Self {
        Self::new()
    }
}

struct LevelQueues {
    queues: [VecDeque<usize>; 3],
    admitted: Vec<bool>,
}

impl LevelQueues {
    fn new(len: usize) -> Self {
        Self {
            queues: Default::default(),
            admitted: vec![false; len],
        }
    }

    fn admit(&mut self, work: &WorkingSet<'_>, time: Time) {
        for i in work.ready_at(time) {
            if !self.admitted[i] {
                self.admitted[i] = true;
                self.queues[work.process(i).queue_level.index()].push_back(i);
            }
        }
    }

    /// Highest-priority non-empty level.
    fn active_level(&self) -> Option<QueueLevel> {
        QueueLevel::ALL
            .into_iter()
            .find(|level| !self.queues[level.index()].is_empty())
    }

    /// Whether any level above `level` has work.
    fn has_higher(&self, level: QueueLevel) -> bool {
        self.queues[..level.index()].iter().any(|q| !q.is_empty())
    }
}

impl SchedulingPolicy for MultilevelQueue {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MultilevelQueue
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut work = WorkingSet::new(processes);
        let mut recorder = TimelineRecorder::new(processes);
        let mut levels = LevelQueues::new(processes.len());
        let mut guard = StepGuard::new("multilevel_queue", self.step_limit);

        while work.has_pending() && guard.tick() {
            let now = recorder.now();
            levels.admit(&work, now);

            let level = match levels.active_level() {
                Some(level) => level,
                None => match work.earliest_pending_arrival() {
                    Some(arrival) if arrival > now => {
                        recorder.idle_until(arrival);
                        continue;
                    }
                    _ => break,
                },
            };

            let current = match levels.queues[level.index()].pop_front() {
                Some(i) => i,
                None => break,
            };
            let remaining = work.remaining(current);
            let slice = level.quantum().map_or(remaining, |q| q.min(remaining));

            // Admission can only change at an arrival, so jump between them.
            let mut run = 0;
            while run < slice {
                run = work
                    .next_arrival_after(now + run)
                    .map_or(slice, |arrival| (arrival - now).min(slice));
                levels.admit(&work, now + run);
                if levels.has_higher(level) {
                    break;
                }
            }

            let ran = recorder.execute(current, run);
            work.consume(current, ran);

            if work.is_pending(current) {
                if run < slice {
                    levels.queues[level.index()].push_front(current);
                } else {
                    levels.queues[level.index()].push_back(current);
                }
            }
        }

        let result = recorder.finish(|p| Some(PolicyAttribute::QueueLevel(p.queue_level)));
        log_summary(self.algorithm(), &result);
        result
    }
}
