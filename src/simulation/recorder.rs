//! Timeline construction.

use crate::models::{PolicyAttribute, Process, ProcessResult, SimulationResult, Time, TimelineBlock};

/// Builds a gapless timeline while tracking the simulation clock.
///
/// The clock starts at 0 and only moves forward through emitted blocks,
/// so `total_time` always equals the end of the last block.
///
/// # Context switches
/// Every emitted block (idle or execution) counts one switch, including
/// the first. Policies with extra accounting call
/// [`count_preemption`](Self::count_preemption).
#[derive(Debug, Clone)]
pub struct TimelineRecorder<'a> {
    processes: &'a [Process],
    clock: Time,
    blocks: Vec<TimelineBlock>,
    context_switches: u32,
    first_start: Vec<Option<Time>>,
    finish: Vec<Option<Time>>,
}

impl<'a> TimelineRecorder<'a> {
    /// Creates a recorder at t=0.
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            clock: 0,
            blocks: Vec::new(),
            context_switches: 0,
            first_start: vec![None; processes.len()],
            finish: vec![None; processes.len()],
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> Time {
        self.clock
    }

    /// Context switches counted so far.
    pub fn context_switches(&self) -> u32 {
        self.context_switches
    }

    /// Advances the clock to `time`, emitting an idle block for the gap.
    ///
    /// No-op if `time` is not in the future.
    pub fn idle_until(&mut self, time: Time) {
        if time <= self.clock {
            return;
        }
        self.blocks.push(TimelineBlock::idle(self.clock, time));
        self.context_switches += 1;
        self.clock = time;
    }

    /// Runs the process at `index` for `duration` units from the current
    /// clock and returns the units actually run.
    ///
    /// A non-positive duration emits nothing and returns 0.
    pub fn execute(&mut self, index: usize, duration: Time) -> Time {
        if duration <= 0 {
            return 0;
        }
        let start = self.clock;
        let end = start + duration;
        self.blocks
            .push(TimelineBlock::execution(&self.processes[index].pid, start, end));
        self.context_switches += 1;
        self.first_start[index].get_or_insert(start);
        self.finish[index] = Some(end);
        self.clock = end;
        duration
    }

    /// Counts one extra switch for a run segment cut short by preemption.
    pub fn count_preemption(&mut self) {
        self.context_switches += 1;
    }

    /// Finalizes the run into a [`SimulationResult`].
    ///
    /// Results are produced in input order. A process that never ran
    /// (only possible when a guard stopped the run early or its burst was
    /// not positive) is reported as finishing and first running at its
    /// arrival.
    pub fn finish<F>(self, attribute: F) -> SimulationResult
    where
        F: Fn(&Process) -> Option<PolicyAttribute>,
    {
        let process_results = self
            .processes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let first_start = self.first_start[i].unwrap_or(p.arrival);
                let finish_time = self.finish[i].unwrap_or(p.arrival);
                let turnaround_time = finish_time - p.arrival;
                ProcessResult {
                    pid: p.pid.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    attribute: attribute(p),
                    finish_time,
                    waiting_time: turnaround_time - p.burst,
                    turnaround_time,
                    response_time: first_start - p.arrival,
                }
            })
            .collect();

        SimulationResult {
            timeline: self.blocks,
            process_results,
            total_time: self.clock,
            context_switches: self.context_switches,
        }
    }
}
