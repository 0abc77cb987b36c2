//! Round Robin (preemptive, fixed time quantum).
//!
//! # Algorithm
//!
//! 1. Admit every arrived, unfinished process not yet in the ready queue
//!    (FIFO, input order among simultaneous arrivals).
//! 2. If the queue is empty, stop when all work is done, otherwise idle
//!    until the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Admit the arrivals up to the new clock, then put the just-run
//!    process back at the tail if it still has work.
//!
//! A quantum below 1 makes no progress; the step guard ends such runs.

use std::collections::VecDeque;

use super::{log_summary, Algorithm, SchedulingPolicy};
use crate::models::{Process, SimulationResult, Time};
use crate::simulation::{StepGuard, TimelineRecorder, WorkingSet, DEFAULT_STEP_LIMIT};

/// Default time quantum.
pub const DEFAULT_TIME_QUANTUM: Time = 2;

/// Time-sliced FIFO scheduling.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    time_quantum: Time,
    step_limit: usize,
}

impl RoundRobin {
    /// Creates the policy with the given quantum.
    pub fn new(time_quantum: Time) -> Self {
        Self {
            time_quantum,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Sets the non-termination guard limit.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Configured quantum.
    pub fn time_quantum(&self) -> Time {
        self.time_quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_QUANTUM)
    }
}

/// FIFO ready queue with one-time admission per process.
struct ReadyQueue {
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            admitted: vec![false; len],
        }
    }

    /// Appends newly arrived processes. A process stays admitted until it
    /// finishes, so the running process is never enqueued twice.
    fn admit(&mut self, work: &WorkingSet<'_>, time: Time) {
        for i in work.ready_at(time) {
            if !self.admitted[i] {
                self.admitted[i] = true;
                self.queue.push_back(i);
            }
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut work = WorkingSet::new(processes);
        let mut recorder = TimelineRecorder::new(processes);
        let mut ready = ReadyQueue::new(processes.len());
        let mut guard = StepGuard::new("round_robin", self.step_limit);

        while guard.tick() {
            let now = recorder.now();
            ready.admit(&work, now);

            let current = match ready.queue.pop_front() {
                Some(i) => i,
                None => {
                    if !work.has_pending() {
                        break;
                    }
                    match work.next_arrival_after(now) {
                        Some(arrival) => {
                            recorder.idle_until(arrival);
                            continue;
                        }
                        None => break,
                    }
                }
            };

            let slice = self.time_quantum.min(work.remaining(current));
            let ran = recorder.execute(current, slice);
            work.consume(current, ran);

            ready.admit(&work, recorder.now());
            if work.is_pending(current) {
                ready.queue.push_back(current);
            }
        }

        let result = recorder.finish(|_| None);
        log_summary(self.algorithm(), &result);
        result
    }
}
