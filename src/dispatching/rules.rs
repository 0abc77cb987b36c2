//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower keys for processes that should run first.

use super::{SelectionKey, SelectionRule};
use crate::models::{Process, Time};

/// First Arrival.
///
/// Orders by arrival time only. Used by FCFS.
#[derive(Debug, Clone, Copy)]
pub struct FirstArrival;

impl SelectionRule for FirstArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &Process, _remaining: Time) -> SelectionKey {
        (process.arrival, 0)
    }
}

/// Shortest Burst.
///
/// Orders by total burst. Ties are not broken by arrival.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process, _remaining: Time) -> SelectionKey {
        (process.burst, 0)
    }
}

/// Shortest Remaining Time, then earliest arrival.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process, remaining: Time) -> SelectionKey {
        (remaining, process.arrival)
    }
}

/// Lowest priority value, then earliest arrival.
#[derive(Debug, Clone, Copy)]
pub struct PriorityThenArrival;

impl SelectionRule for PriorityThenArrival {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process, _remaining: Time) -> SelectionKey {
        (i64::from(process.priority), process.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_arrival() {
        let early = Process::new("early", 1, 9);
        let late = Process::new("late", 4, 1);
        assert!(FirstArrival.key(&early, 9) < FirstArrival.key(&late, 1));
    }

    #[test]
    fn test_shortest_burst_ignores_remaining() {
        let short = Process::new("short", 0, 2);
        let long = Process::new("long", 0, 6);
        assert!(ShortestBurst.key(&short, 2) < ShortestBurst.key(&long, 1));
    }

    #[test]
    fn test_shortest_remaining_tie_on_arrival() {
        let a = Process::new("a", 0, 10);
        let b = Process::new("b", 3, 4);
        assert!(ShortestRemaining.key(&b, 4) < ShortestRemaining.key(&a, 5));
        assert!(ShortestRemaining.key(&a, 4) < ShortestRemaining.key(&b, 4));
    }

    #[test]
    fn test_priority_lower_value_first() {
        let urgent = Process::new("urgent", 5, 1).with_priority(1);
        let relaxed = Process::new("relaxed", 0, 1).with_priority(3);
        assert!(PriorityThenArrival.key(&urgent, 1) < PriorityThenArrival.key(&relaxed, 1));
    }

    #[test]
    fn test_priority_tie_on_arrival() {
        let first = Process::new("first", 0, 1).with_priority(2);
        let second = Process::new("second", 1, 1).with_priority(2);
        assert!(PriorityThenArrival.key(&first, 1) < PriorityThenArrival.key(&second, 1));
    }
}
