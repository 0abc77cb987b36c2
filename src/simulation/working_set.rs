//! Per-call remaining-work bookkeeping.

use crate::models::{Process, Time};

/// Remaining burst of every process, indexed by input position.
///
/// A process with `remaining <= 0` is finished. Processes whose burst is
/// not positive therefore never become ready.
#[derive(Debug, Clone)]
pub struct WorkingSet<'a> {
    processes: &'a [Process],
    remaining: Vec<Time>,
}

impl<'a> WorkingSet<'a> {
    /// Starts every process with its full burst remaining.
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst).collect(),
        }
    }

    /// Input process at `index`.
    #[inline]
    pub fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    /// Remaining burst of the process at `index`.
    #[inline]
    pub fn remaining(&self, index: usize) -> Time {
        self.remaining[index]
    }

    /// Whether the process at `index` still needs CPU.
    #[inline]
    pub fn is_pending(&self, index: usize) -> bool {
        self.remaining[index] > 0
    }

    /// Whether any process still needs CPU.
    pub fn has_pending(&self) -> bool {
        self.remaining.iter().any(|&r| r > 0)
    }

    /// Indices of pending processes that have arrived by `time`, in input order.
    pub fn ready_at(&self, time: Time) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len())
            .filter(move |&i| self.is_pending(i) && self.processes[i].arrival <= time)
    }

    /// Earliest arrival strictly after `time` among pending processes.
    pub fn next_arrival_after(&self, time: Time) -> Option<Time> {
        self.pending_arrivals().filter(|&a| a > time).min()
    }

    /// Earliest arrival among pending processes.
    pub fn earliest_pending_arrival(&self) -> Option<Time> {
        self.pending_arrivals().min()
    }

    /// Deducts executed time from the process at `index`.
    pub fn consume(&mut self, index: usize, units: Time) {
        self.remaining[index] -= units;
    }

    fn pending_arrivals(&self) -> impl Iterator<Item = Time> + '_ {
        self.processes
            .iter()
            .zip(&self.remaining)
            .filter(|(_, r)| **r > 0)
            .map(|(p, _)| p.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 4, 2),
            Process::new("P3", 2, 1),
        ]
    }

    #[test]
    fn test_ready_at() {
        let procs = sample();
        let work = WorkingSet::new(&procs);
        assert_eq!(work.ready_at(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(work.ready_at(2).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(work.ready_at(10).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_consume_and_pending() {
        let procs = sample();
        let mut work = WorkingSet::new(&procs);
        work.consume(0, 3);
        assert!(!work.is_pending(0));
        assert_eq!(work.ready_at(2).collect::<Vec<_>>(), vec![2]);
        assert!(work.has_pending());

        work.consume(1, 2);
        work.consume(2, 1);
        assert!(!work.has_pending());
    }

    #[test]
    fn test_next_arrivals() {
        let procs = sample();
        let mut work = WorkingSet::new(&procs);
        assert_eq!(work.next_arrival_after(0), Some(2));
        assert_eq!(work.next_arrival_after(2), Some(4));
        assert_eq!(work.next_arrival_after(4), None);

        work.consume(0, 3);
        assert_eq!(work.earliest_pending_arrival(), Some(2));
    }

    #[test]
    fn test_non_positive_burst_never_pending() {
        let procs = vec![Process::new("Z", 0, 0)];
        let work = WorkingSet::new(&procs);
        assert!(!work.has_pending());
        assert_eq!(work.earliest_pending_arrival(), None);
    }
}
