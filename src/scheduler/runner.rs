//! Shared stepping loops for rule-driven policies.
//!
//! SJF and non-preemptive Priority differ only in their selection rule,
//! as do SRTF and preemptive Priority. Each pair runs one loop below.

use crate::dispatching::{select_best, SelectionRule};
use crate::models::{PolicyAttribute, Process, SimulationResult};
use crate::simulation::{StepGuard, TimelineRecorder, WorkingSet};

/// How a preemptive loop counts context switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchAccounting {
    /// One switch per emitted block.
    PerBlock,
    /// One switch per emitted block plus one for every run segment that
    /// ends with work still remaining (SRTF).
    PerBlockAndPreemption,
}

/// Picks the best ready process and runs it to completion; idles to the
/// earliest pending arrival when nothing is ready.
pub(crate) fn run_to_completion<R, F>(
    processes: &[Process],
    rule: &R,
    mut guard: StepGuard,
    attribute: F,
) -> SimulationResult
where
    R: SelectionRule + ?Sized,
    F: Fn(&Process) -> Option<PolicyAttribute>,
{
    let mut work = WorkingSet::new(processes);
    let mut recorder = TimelineRecorder::new(processes);

    while work.has_pending() && guard.tick() {
        let now = recorder.now();
        match select_best(rule, &work, now) {
            Some(i) => {
                let ran = recorder.execute(i, work.remaining(i));
                work.consume(i, ran);
            }
            None => match work.earliest_pending_arrival() {
                Some(arrival) => recorder.idle_until(arrival),
                None => break,
            },
        }
    }

    recorder.finish(attribute)
}

/// Picks the best ready process and runs it until the next arrival or its
/// own completion, whichever comes first, then re-decides.
pub(crate) fn run_until_next_event<R, F>(
    processes: &[Process],
    rule: &R,
    accounting: SwitchAccounting,
    mut guard: StepGuard,
    attribute: F,
) -> SimulationResult
where
    R: SelectionRule + ?Sized,
    F: Fn(&Process) -> Option<PolicyAttribute>,
{
    let mut work = WorkingSet::new(processes);
    let mut recorder = TimelineRecorder::new(processes);

    while work.has_pending() && guard.tick() {
        let now = recorder.now();
        let current = match select_best(rule, &work, now) {
            Some(i) => i,
            None => match work.earliest_pending_arrival() {
                Some(arrival) => {
                    recorder.idle_until(arrival);
                    continue;
                }
                None => break,
            },
        };

        let completion = now + work.remaining(current);
        let boundary = work
            .next_arrival_after(now)
            .map_or(completion, |arrival| arrival.min(completion));

        let ran = recorder.execute(current, boundary - now);
        work.consume(current, ran);

        if accounting == SwitchAccounting::PerBlockAndPreemption && work.is_pending(current) {
            recorder.count_preemption();
        }
    }

    recorder.finish(attribute)
}
