//! Dispatching rules for selecting the next process.
//!
//! A rule maps a ready process to a [`SelectionKey`]; the process with
//! the smallest key is dispatched. Ties keep input order.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::{rules, select_best};
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::simulation::WorkingSet;
//!
//! let procs = vec![Process::new("long", 0, 8), Process::new("short", 0, 2)];
//! let work = WorkingSet::new(&procs);
//! assert_eq!(select_best(&rules::ShortestBurst, &work, 0), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::fmt::Debug;

use tracing::trace;

use crate::models::{Process, Time};
use crate::simulation::WorkingSet;

/// Lexicographic selection key. Lower = dispatched first.
pub type SelectionKey = (i64, i64);

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Keys are integers so ties are exact
/// and resolved by input order.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ranks a ready process given its remaining burst.
    fn key(&self, process: &Process, remaining: Time) -> SelectionKey;
}

/// Index of the ready process (arrived by `time`, work remaining) with the
/// smallest key, or `None` if nothing is ready.
///
/// Among equal keys the earliest input position wins.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    work: &WorkingSet<'_>,
    time: Time,
) -> Option<usize> {
    let best = work
        .ready_at(time)
        .min_by_key(|&i| rule.key(work.process(i), work.remaining(i)));

    if let Some(i) = best {
        trace!(
            rule = rule.name(),
            time,
            pid = %work.process(i).pid,
            "dispatch"
        );
    }
    best
}
